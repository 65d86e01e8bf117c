pub mod audio_probe;
pub mod quran_text_repository;

pub use audio_probe::{AudioProbe, HttpAudioProbe};
pub use quran_text_repository::{
    AlQuranCloudRepository, QuranTextRepository, SampleQuranTextRepository,
};
