pub mod audio_service;
pub mod quiz_sampler;
pub mod quiz_session_service;
pub mod quran_text_service;
pub mod range_codec;

pub use audio_service::AudioService;
pub use quiz_sampler::QuizSampler;
pub use quiz_session_service::QuizSessionService;
pub use quran_text_service::{QuranTextService, TextSourceSettings};
