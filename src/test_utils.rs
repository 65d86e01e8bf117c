#[cfg(test)]
pub mod fixtures {
    use crate::constants::sample_text::SAMPLE_AYAHS;
    use crate::models::domain::QuranText;

    /// Al-Fatiha, all seven ayahs.
    pub fn fatiha_text() -> QuranText {
        SAMPLE_AYAHS
            .iter()
            .map(|(surah, ayah, text)| (*surah, *ayah, *text))
            .collect()
    }

    /// The first `count` ayahs of Al-Fatiha only.
    pub fn partial_fatiha_text(count: u16) -> QuranText {
        SAMPLE_AYAHS
            .iter()
            .filter(|(_, ayah, _)| *ayah <= count)
            .map(|(surah, ayah, text)| (*surah, *ayah, *text))
            .collect()
    }

    /// Placeholder text for every ayah of the given surahs.
    pub fn full_surahs_text(surahs: &[u16]) -> QuranText {
        let mut text = QuranText::new();
        for &number in surahs {
            if let Some(surah) = crate::constants::surahs::find_surah(number) {
                for ayah in 1..=surah.ayah_count {
                    text.insert(number, ayah, format!("{}:{}", number, ayah));
                }
            }
        }
        text
    }
}

#[cfg(test)]
pub mod fakes {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::{AppError, AppResult},
        models::domain::QuranText,
        repositories::{AudioProbe, QuranTextRepository},
        services::{
            audio_service::AudioService,
            quran_text_service::{QuranTextService, TextSourceSettings},
        },
    };

    /// Serves a fixed text (or an error), counting fetches.
    pub struct FakeTextRepository {
        text: Option<QuranText>,
        delay: Option<Duration>,
        fetch_limit: Option<usize>,
        fetches: AtomicUsize,
    }

    impl FakeTextRepository {
        pub fn new(text: QuranText) -> Self {
            Self {
                text: Some(text),
                delay: None,
                fetch_limit: None,
                fetches: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                text: None,
                delay: None,
                fetch_limit: None,
                fetches: AtomicUsize::new(0),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Serves the text for the first `limit` fetches only, failing after.
        pub fn with_fetch_limit(mut self, limit: usize) -> Self {
            self.fetch_limit = Some(limit);
            self
        }

        pub fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuranTextRepository for FakeTextRepository {
        async fn fetch_complete_text(&self) -> AppResult<QuranText> {
            let fetch = self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.text
                .clone()
                .filter(|_| self.fetch_limit.map_or(true, |limit| fetch < limit))
                .ok_or_else(|| AppError::ExternalServiceError("fake remote is down".to_string()))
        }
    }

    pub struct FailingTextRepository;

    #[async_trait]
    impl QuranTextRepository for FailingTextRepository {
        async fn fetch_complete_text(&self) -> AppResult<QuranText> {
            Err(AppError::ExternalServiceError("connection refused".to_string()))
        }
    }

    /// Accepts every URL.
    pub struct ReachableAudioProbe;

    #[async_trait]
    impl AudioProbe for ReachableAudioProbe {
        async fn probe(&self, _url: &str) -> AppResult<()> {
            Ok(())
        }
    }

    /// A text service whose remote tier serves `text` and whose fallback fails.
    pub fn text_service_with(text: QuranText) -> Arc<QuranTextService> {
        Arc::new(QuranTextService::new(
            Arc::new(FakeTextRepository::new(text)),
            Arc::new(FailingTextRepository),
            TextSourceSettings::from_config(&Config::test_config()),
        ))
    }

    /// Application state over `text` with every audio URL reachable.
    pub fn app_state_with(text: QuranText) -> AppState {
        AppState::with_services(
            text_service_with(text),
            Arc::new(AudioService::new(Arc::new(ReachableAudioProbe))),
            Config::test_config(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::AyahLocation;

    #[test]
    fn test_fixtures_fatiha_text() {
        let text = fatiha_text();
        assert_eq!(text.total_ayahs(), 7);
    }

    #[test]
    fn test_fixtures_partial_fatiha_text() {
        let text = partial_fatiha_text(3);
        assert_eq!(text.surah_ayahs(1), vec![1, 2, 3]);
    }

    #[test]
    fn test_fixtures_full_surahs_text() {
        let text = full_surahs_text(&[1, 114]);
        assert_eq!(text.total_ayahs(), 13);
        assert_eq!(text.text_at(AyahLocation::new(114, 6)), Some("114:6"));
    }
}
