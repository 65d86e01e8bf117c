use std::{env, time::Duration};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub quran_text_api_base: String,
    pub quran_text_edition: String,
    pub text_cache_hours: u64,
    pub text_fetch_timeout_secs: u64,
    pub text_fallback_retry_secs: u64,
    pub sample_text_path: Option<String>,
    pub next_ayah_count: u16,
    pub audio_probe_timeout_secs: u64,
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parsed_var("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            quran_text_api_base: env::var("QURAN_TEXT_API_BASE")
                .unwrap_or_else(|_| "https://api.alquran.cloud/v1".to_string()),
            quran_text_edition: env::var("QURAN_TEXT_EDITION")
                .unwrap_or_else(|_| "quran-uthmani".to_string()),
            text_cache_hours: parsed_var("QURAN_TEXT_CACHE_HOURS", 24),
            text_fetch_timeout_secs: parsed_var("QURAN_TEXT_FETCH_TIMEOUT_SECS", 15),
            text_fallback_retry_secs: parsed_var("QURAN_TEXT_FALLBACK_RETRY_SECS", 60),
            sample_text_path: env::var("QURAN_SAMPLE_TEXT_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            next_ayah_count: parsed_var("QUIZ_NEXT_AYAH_COUNT", 3),
            audio_probe_timeout_secs: parsed_var("AUDIO_PROBE_TIMEOUT_SECS", 5),
        }
    }

    pub fn text_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.text_cache_hours * 60 * 60)
    }

    pub fn text_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.text_fetch_timeout_secs)
    }

    pub fn text_fallback_retry(&self) -> Duration {
        Duration::from_secs(self.text_fallback_retry_secs)
    }

    pub fn audio_probe_timeout(&self) -> Duration {
        Duration::from_secs(self.audio_probe_timeout_secs)
    }

    /// Rejects values that would make the text cache or the quiz unusable.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.text_cache_hours == 0 {
            return Err(AppError::ValidationError(
                "QURAN_TEXT_CACHE_HOURS must be greater than zero".to_string(),
            ));
        }
        if self.text_fetch_timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "QURAN_TEXT_FETCH_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        if self.next_ayah_count == 0 {
            return Err(AppError::ValidationError(
                "QUIZ_NEXT_AYAH_COUNT must be greater than zero".to_string(),
            ));
        }
        if !self.quran_text_api_base.starts_with("http") {
            return Err(AppError::ValidationError(format!(
                "QURAN_TEXT_API_BASE is not an http(s) URL: {}",
                self.quran_text_api_base
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            quran_text_api_base: "http://127.0.0.1:9".to_string(),
            quran_text_edition: "quran-uthmani".to_string(),
            text_cache_hours: 24,
            text_fetch_timeout_secs: 1,
            text_fallback_retry_secs: 60,
            sample_text_path: None,
            next_ayah_count: 3,
            audio_probe_timeout_secs: 1,
        }
    }
}
