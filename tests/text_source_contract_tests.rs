use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;

use hifz_tracker_server::{
    errors::{AppError, AppResult},
    models::domain::{AyahLocation, QuranText, TextSourceKind},
    repositories::QuranTextRepository,
    services::{QuranTextService, TextSourceSettings},
};

/// Serves Al-Ikhlas after a delay and counts how often it was asked.
struct SlowRemote {
    fetches: AtomicUsize,
    delay: Duration,
}

impl SlowRemote {
    fn new(delay: Duration) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            delay,
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuranTextRepository for SlowRemote {
    async fn fetch_complete_text(&self) -> AppResult<QuranText> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(QuranText::from_iter([
            (112, 1, "qul huwa allahu ahad"),
            (112, 2, "allahu as-samad"),
            (112, 3, "lam yalid wa lam yulad"),
            (112, 4, "wa lam yakun lahu kufuwan ahad"),
        ]))
    }
}

struct NoFallback;

#[async_trait]
impl QuranTextRepository for NoFallback {
    async fn fetch_complete_text(&self) -> AppResult<QuranText> {
        Err(AppError::InternalError("no sample configured".to_string()))
    }
}

fn service(remote: Arc<SlowRemote>) -> QuranTextService {
    QuranTextService::new(remote, Arc::new(NoFallback), TextSourceSettings::default())
}

#[tokio::test(start_paused = true)]
async fn concurrent_cold_callers_share_one_fetch() {
    let remote = Arc::new(SlowRemote::new(Duration::from_secs(2)));
    let service = service(remote.clone());

    let (a, b, c) = tokio::join!(
        service.text_at(AyahLocation::new(112, 1)),
        service.has_ayah(AyahLocation::new(112, 4)),
        service.stats()
    );

    assert_eq!(remote.fetch_count(), 1);
    assert_eq!(a.as_deref(), Some("qul huwa allahu ahad"));
    assert!(b);
    assert_eq!(c.source, TextSourceKind::Remote);
    assert_eq!(c.total_ayahs, 4);
}

#[tokio::test(start_paused = true)]
async fn warm_cache_is_served_until_it_expires() {
    let remote = Arc::new(SlowRemote::new(Duration::from_millis(10)));
    let service = service(remote.clone());

    service.init().await;
    tokio::time::advance(Duration::from_secs(23 * 60 * 60)).await;
    let stats = service.stats().await;
    assert_eq!(remote.fetch_count(), 1);
    assert!(stats.is_cached);
    assert_eq!(stats.cache_age_minutes, 23 * 60);

    tokio::time::advance(Duration::from_secs(2 * 60 * 60)).await;
    service.stats().await;
    assert_eq!(remote.fetch_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_remote_times_out_into_total_failure() {
    let remote = Arc::new(SlowRemote::new(Duration::from_secs(60)));
    let service = service(remote);

    let stats = service.stats().await;

    assert!(!stats.loaded);
    assert_eq!(stats.source, TextSourceKind::None);
    assert!(stats
        .last_error
        .is_some_and(|error| error.contains("timed out")));
    assert!(!service.has_ayah(AyahLocation::new(112, 1)).await);
}
