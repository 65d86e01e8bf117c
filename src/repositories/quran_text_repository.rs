use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;

use crate::{
    config::Config,
    constants::sample_text::SAMPLE_AYAHS,
    errors::{AppError, AppResult},
    models::{
        domain::QuranText,
        dto::quran_api::{QuranApiEdition, QuranApiResponse},
    },
};

/// A source able to produce the complete text in one call.
#[async_trait]
pub trait QuranTextRepository: Send + Sync {
    async fn fetch_complete_text(&self) -> AppResult<QuranText>;
}

/// Bulk endpoint of the Al Quran Cloud API.
pub struct AlQuranCloudRepository {
    client: reqwest::Client,
    base_url: String,
    edition: String,
}

impl AlQuranCloudRepository {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.text_fetch_timeout() + Duration::from_secs(1))
            .build()?;

        Ok(Self {
            client,
            base_url: config.quran_text_api_base.trim_end_matches('/').to_string(),
            edition: config.quran_text_edition.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/quran/{}", self.base_url, self.edition)
    }
}

#[async_trait]
impl QuranTextRepository for AlQuranCloudRepository {
    async fn fetch_complete_text(&self) -> AppResult<QuranText> {
        let url = self.endpoint();
        log::info!("Fetching complete Quran text from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Quran API error: {}",
                status
            )));
        }

        let body: QuranApiResponse = response.json().await?;
        if body.status != "OK" {
            return Err(AppError::ExternalServiceError(format!(
                "Quran API returned status '{}' (code {})",
                body.status, body.code
            )));
        }

        let edition = body.data.ok_or_else(|| {
            AppError::ExternalServiceError("Quran API response has no data".to_string())
        })?;

        Ok(QuranText::from(edition))
    }
}

/// Fallback tier: the compiled-in Al-Fatiha sample, or a JSON file shaped like
/// the API's `data` object when a path is configured.
pub struct SampleQuranTextRepository {
    path: Option<PathBuf>,
}

impl SampleQuranTextRepository {
    pub fn bundled() -> Self {
        Self { path: None }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.sample_text_path {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }
}

#[async_trait]
impl QuranTextRepository for SampleQuranTextRepository {
    async fn fetch_complete_text(&self) -> AppResult<QuranText> {
        let Some(path) = &self.path else {
            return Ok(SAMPLE_AYAHS
                .iter()
                .map(|(surah, ayah, text)| (*surah, *ayah, *text))
                .collect());
        };

        log::info!("Loading sample Quran text from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await?;
        let edition: QuranApiEdition = serde_json::from_str(&raw)?;
        Ok(QuranText::from(edition))
    }
}
