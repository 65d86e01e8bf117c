use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Checks whether an audio URL can currently be served.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioProbe: Send + Sync {
    async fn probe(&self, url: &str) -> AppResult<()>;
}

pub struct HttpAudioProbe {
    client: reqwest::Client,
}

impl HttpAudioProbe {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.audio_probe_timeout())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AudioProbe for HttpAudioProbe {
    async fn probe(&self, url: &str) -> AppResult<()> {
        let response = self.client.head(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "{} responded with {}",
                url, status
            )));
        }
        Ok(())
    }
}
