pub mod audio;
pub mod juz;
pub mod sample_text;
pub mod surahs;
