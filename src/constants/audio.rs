/// Recitation IDs published by the Quran.com API.
pub mod reciters {
    pub const MISHARY_RASHID: u16 = 7;
    pub const ABDUL_BASIT: u16 = 1;
    pub const MAHER_AL_MUAIQLY: u16 = 5;
    pub const SUDAIS: u16 = 12;
    pub const HUSARY: u16 = 2;
    pub const MINSHAWI: u16 = 3;
    pub const GHAMDI: u16 = 9;
}

pub const DEFAULT_RECITER_ID: u16 = reciters::HUSARY;

pub const AUDIO_FORMAT: &str = "mp3";

/// Al-Husary recitation mirrors, in the order they are tried.
/// `{sss}`/`{aaa}` are the zero-padded surah and ayah, `{s}`/`{a}` the plain ones.
pub const HUSARY_URL_TEMPLATES: [&str; 4] = [
    "https://www.everyayah.com/data/Husary_128kbps/{sss}{aaa}.mp3",
    "https://everyayah.com/data/Husary_64kbps/{sss}{aaa}.mp3",
    "https://globalquran.com/audio/husary/{sss}{aaa}.mp3",
    "https://cdn.islamic.network/quran/audio/128/ar.husary/{s}/{a}.mp3",
];
