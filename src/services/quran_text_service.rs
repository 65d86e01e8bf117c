use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::time::Instant;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{AyahLocation, QuranText, TextSourceKind, TextSourceStats},
    repositories::{AlQuranCloudRepository, QuranTextRepository, SampleQuranTextRepository},
};

#[derive(Clone, Copy, Debug)]
pub struct TextSourceSettings {
    /// How long a successful remote load is served before refetching.
    pub cache_ttl: Duration,
    /// How long a sample (or empty) result is served before retrying the remote API.
    pub fallback_retry: Duration,
    pub fetch_timeout: Duration,
}

impl TextSourceSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cache_ttl: config.text_cache_ttl(),
            fallback_retry: config.text_fallback_retry(),
            fetch_timeout: config.text_fetch_timeout(),
        }
    }
}

impl Default for TextSourceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            fallback_retry: Duration::from_secs(60),
            fetch_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug)]
struct LoadedText {
    text: Arc<QuranText>,
    source: TextSourceKind,
    loaded_at: Instant,
    error: Option<String>,
}

impl LoadedText {
    fn new(text: QuranText, source: TextSourceKind, error: Option<String>) -> Self {
        Self {
            text: Arc::new(text),
            source,
            loaded_at: Instant::now(),
            error,
        }
    }

    fn is_fresh(&self, settings: &TextSourceSettings) -> bool {
        let window = match self.source {
            TextSourceKind::Remote => settings.cache_ttl,
            TextSourceKind::Sample | TextSourceKind::None => settings.fallback_retry,
        };
        self.loaded_at.elapsed() < window
    }
}

type PendingLoad = Shared<BoxFuture<'static, Arc<LoadedText>>>;

#[derive(Default)]
struct CacheState {
    loaded: Option<Arc<LoadedText>>,
    pending: Option<PendingLoad>,
    /// Bumped by `reset`; a load started under an older epoch is not stored.
    epoch: u64,
}

fn lock(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Process-wide Quran text with a remote tier, a sample tier and a freshness
/// window. Concurrent cold loads share a single in-flight fetch.
pub struct QuranTextService {
    remote: Arc<dyn QuranTextRepository>,
    fallback: Arc<dyn QuranTextRepository>,
    settings: TextSourceSettings,
    state: Arc<Mutex<CacheState>>,
}

impl QuranTextService {
    pub fn new(
        remote: Arc<dyn QuranTextRepository>,
        fallback: Arc<dyn QuranTextRepository>,
        settings: TextSourceSettings,
    ) -> Self {
        Self {
            remote,
            fallback,
            settings,
            state: Arc::new(Mutex::new(CacheState::default())),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            Arc::new(AlQuranCloudRepository::new(config)?),
            Arc::new(SampleQuranTextRepository::from_config(config)),
            TextSourceSettings::from_config(config),
        ))
    }

    /// Warms the cache and reports what was loaded.
    pub async fn init(&self) -> TextSourceStats {
        self.stats().await
    }

    /// Drops cached text. Loads already in flight finish but are not kept.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        state.loaded = None;
        state.pending = None;
        state.epoch += 1;
        log::info!("Quran text cache reset (epoch {})", state.epoch);
    }

    /// The text currently served, loading it first if the cache is cold or stale.
    pub async fn snapshot(&self) -> Arc<QuranText> {
        self.current().await.text.clone()
    }

    pub async fn text_at(&self, location: AyahLocation) -> Option<String> {
        self.snapshot().await.text_at(location).map(str::to_owned)
    }

    pub async fn has_ayah(&self, location: AyahLocation) -> bool {
        self.snapshot().await.has_ayah(location)
    }

    pub async fn stats(&self) -> TextSourceStats {
        let current = self.current().await;
        let is_remote = current.source == TextSourceKind::Remote;

        TextSourceStats {
            loaded: current.source != TextSourceKind::None,
            source: current.source,
            total_surahs: current.text.total_surahs(),
            total_ayahs: current.text.total_ayahs(),
            cache_age_minutes: if is_remote {
                (current.loaded_at.elapsed().as_secs() / 60) as i64
            } else {
                0
            },
            is_cached: is_remote && current.is_fresh(&self.settings),
            last_error: current.error.clone(),
        }
    }

    async fn current(&self) -> Arc<LoadedText> {
        let pending = {
            let mut state = lock(&self.state);

            if let Some(loaded) = &state.loaded {
                if loaded.is_fresh(&self.settings) {
                    return Arc::clone(loaded);
                }
            }

            if let Some(pending) = state.pending.clone() {
                log::debug!("Joining in-flight Quran text load");
                pending
            } else {
                let pending = self.start_load(state.epoch);
                state.pending = Some(pending.clone());
                pending
            }
        };

        pending.await
    }

    fn start_load(&self, epoch: u64) -> PendingLoad {
        let remote = Arc::clone(&self.remote);
        let fallback = Arc::clone(&self.fallback);
        let fetch_timeout = self.settings.fetch_timeout;
        let state = Arc::clone(&self.state);

        async move {
            let loaded = Arc::new(load_tiers(remote, fallback, fetch_timeout).await);

            {
                let mut state = lock(&state);
                if state.epoch == epoch {
                    state.loaded = Some(Arc::clone(&loaded));
                    state.pending = None;
                }
            }

            loaded
        }
        .boxed()
        .shared()
    }
}

async fn load_tiers(
    remote: Arc<dyn QuranTextRepository>,
    fallback: Arc<dyn QuranTextRepository>,
    fetch_timeout: Duration,
) -> LoadedText {
    let remote_error = match tokio::time::timeout(fetch_timeout, remote.fetch_complete_text()).await
    {
        Ok(Ok(text)) if !text.is_empty() => {
            log::info!(
                "Loaded complete Quran text from remote API ({} surahs, {} ayahs)",
                text.total_surahs(),
                text.total_ayahs()
            );
            return LoadedText::new(text, TextSourceKind::Remote, None);
        }
        Ok(Ok(_)) => AppError::TextSourceUnavailable("remote API returned no ayahs".to_string()),
        Ok(Err(err)) => err,
        Err(_) => AppError::TextSourceUnavailable(format!(
            "remote fetch timed out after {}s",
            fetch_timeout.as_secs()
        )),
    };

    log::warn!("Failed to load Quran text from remote API: {}", remote_error);
    log::info!("Falling back to sample Quran text");

    match fallback.fetch_complete_text().await {
        Ok(text) if !text.is_empty() => {
            log::info!("Serving sample Quran text ({} ayahs)", text.total_ayahs());
            LoadedText::new(text, TextSourceKind::Sample, Some(remote_error.to_string()))
        }
        Ok(_) => {
            log::error!("Sample Quran text is empty; every ayah will be reported unavailable");
            LoadedText::new(
                QuranText::new(),
                TextSourceKind::None,
                Some(remote_error.to_string()),
            )
        }
        Err(err) => {
            log::error!("Failed to load sample Quran text: {}", err);
            LoadedText::new(
                QuranText::new(),
                TextSourceKind::None,
                Some(format!("{}; sample: {}", remote_error, err)),
            )
        }
    }
}
