use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    config::Config,
    constants::{
        audio::{AUDIO_FORMAT, DEFAULT_RECITER_ID, HUSARY_URL_TEMPLATES},
        surahs::find_surah,
    },
    errors::{AppError, AppResult},
    models::domain::{AyahAudio, AyahLocation},
    repositories::{AudioProbe, HttpAudioProbe},
};

/// Mirror URLs for one ayah, in the order they should be tried.
pub fn candidate_urls(location: AyahLocation) -> Vec<String> {
    let padded_surah = format!("{:03}", location.surah);
    let padded_ayah = format!("{:03}", location.ayah);

    HUSARY_URL_TEMPLATES
        .iter()
        .map(|template| {
            template
                .replace("{sss}", &padded_surah)
                .replace("{aaa}", &padded_ayah)
                .replace("{s}", &location.surah.to_string())
                .replace("{a}", &location.ayah.to_string())
        })
        .collect()
}

pub struct AudioService {
    probe: Arc<dyn AudioProbe>,
    reciter_id: u16,
    resolved: RwLock<HashMap<AyahLocation, AyahAudio>>,
}

impl AudioService {
    pub fn new(probe: Arc<dyn AudioProbe>) -> Self {
        Self {
            probe,
            reciter_id: DEFAULT_RECITER_ID,
            resolved: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(Arc::new(HttpAudioProbe::new(config)?)))
    }

    /// Finds the first reachable mirror for `location`. Once every mirror has
    /// failed the caller gets `AudioUnavailable`; nothing is retried.
    pub async fn resolve_ayah_audio(&self, location: AyahLocation) -> AppResult<AyahAudio> {
        let surah = find_surah(location.surah).ok_or_else(|| {
            AppError::ValidationError(format!("unknown surah number {}", location.surah))
        })?;
        if location.ayah == 0 || location.ayah > surah.ayah_count {
            return Err(AppError::ValidationError(format!(
                "{} has no ayah {}",
                surah.name, location.ayah
            )));
        }

        if let Some(audio) = self.resolved.read().await.get(&location) {
            return Ok(audio.clone());
        }

        let urls = candidate_urls(location);
        let ayah_key = location.to_string();

        for (attempt, url) in urls.iter().enumerate() {
            match self.probe.probe(url).await {
                Ok(()) => {
                    log::debug!("Audio for {} served by source {}", ayah_key, attempt + 1);
                    let audio = AyahAudio {
                        url: url.clone(),
                        fallback_urls: urls.clone(),
                        ayah_key,
                        reciter_id: self.reciter_id,
                        format: AUDIO_FORMAT.to_string(),
                    };
                    self.resolved.write().await.insert(location, audio.clone());
                    return Ok(audio);
                }
                Err(e) => {
                    log::warn!(
                        "Audio source {}/{} failed for {}: {}",
                        attempt + 1,
                        urls.len(),
                        ayah_key,
                        e
                    );
                }
            }
        }

        log::error!("All {} audio sources failed for {}", urls.len(), ayah_key);
        Err(AppError::AudioUnavailable {
            ayah_key,
            attempted: urls,
        })
    }
}
