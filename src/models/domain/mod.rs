pub mod audio;
pub mod ayah;
pub mod quiz_session;
pub mod quran_text;
pub mod surah;
pub use audio::AyahAudio;
pub use ayah::{AyahLocation, AyahRange, AyahText};
pub use quiz_session::{HistoryEntry, Question, QuizSession, SessionStats, TestMode, TestResult};
pub use quran_text::{QuranText, TextSourceKind, TextSourceStats};
pub use surah::{JuzRef, SurahRef};
