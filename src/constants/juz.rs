use crate::models::domain::JuzRef;

pub const JUZ_COUNT: u16 = 30;

const fn juz(
    number: u16,
    name: &'static str,
    start_surah: u16,
    start_ayah: u16,
    end_surah: u16,
    end_ayah: u16,
) -> JuzRef {
    JuzRef {
        number,
        name,
        start_surah,
        start_ayah,
        end_surah,
        end_ayah,
    }
}

pub static JUZ: [JuzRef; JUZ_COUNT as usize] = [
    juz(1, "Alif Lam Meem", 1, 1, 2, 141),
    juz(2, "Sayaqool", 2, 142, 2, 252),
    juz(3, "Tilkal Rusul", 2, 253, 3, 92),
    juz(4, "Lan Tana Loo", 3, 93, 4, 23),
    juz(5, "Wal Mohsanat", 4, 24, 4, 147),
    juz(6, "La Yuhibbullah", 4, 148, 5, 81),
    juz(7, "Wa Iza Samiu", 5, 82, 6, 110),
    juz(8, "Wa Lau Annana", 6, 111, 7, 87),
    juz(9, "Qalal Malao", 7, 88, 8, 40),
    juz(10, "Wa A'lamu", 8, 41, 9, 92),
    juz(11, "Yatazeroon", 9, 93, 11, 5),
    juz(12, "Wa Mamin Da'abat", 11, 6, 12, 52),
    juz(13, "Wa Ma Ubrioo", 12, 53, 14, 52),
    juz(14, "Rubama", 15, 1, 16, 128),
    juz(15, "Subhanallazi", 17, 1, 18, 74),
    juz(16, "Qal Alam", 18, 75, 20, 135),
    juz(17, "Aqtarabo", 21, 1, 22, 78),
    juz(18, "Qadd Aflaha", 23, 1, 25, 20),
    juz(19, "Wa Qalallazina", 25, 21, 27, 55),
    juz(20, "A'man Khalaq", 27, 56, 29, 45),
    juz(21, "Utlu Ma Oohi", 29, 46, 33, 30),
    juz(22, "Wa Man Yaqnut", 33, 31, 36, 27),
    juz(23, "Wa Mali", 36, 28, 39, 31),
    juz(24, "Faman Azlam", 39, 32, 41, 46),
    juz(25, "Elahe Yud'ao", 41, 47, 45, 37),
    juz(26, "Ha'a Meem", 46, 1, 51, 30),
    juz(27, "Qala Fama Khatbukum", 51, 31, 57, 29),
    juz(28, "Qad Sami Allah", 58, 1, 66, 12),
    juz(29, "Tabarakallazi", 67, 1, 77, 50),
    juz(30, "Amman", 78, 1, 114, 6),
];

pub fn find_juz(number: u16) -> Option<&'static JuzRef> {
    if number == 0 {
        return None;
    }
    JUZ.get(number as usize - 1)
}
