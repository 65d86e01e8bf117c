use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No ayahs available: {0}")]
    NoAyahsAvailable(String),

    #[error("Quran text source unavailable: {0}")]
    TextSourceUnavailable(String),

    #[error("All audio sources failed for {ayah_key}")]
    AudioUnavailable {
        ayah_key: String,
        attempted: Vec<String>,
    },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NoAyahsAvailable(_) => "NO_AYAHS_AVAILABLE",
            AppError::TextSourceUnavailable(_) => "TEXT_SOURCE_UNAVAILABLE",
            AppError::AudioUnavailable { .. } => "AUDIO_UNAVAILABLE",
            AppError::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempted: Option<Vec<String>>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NoAyahsAvailable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TextSourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::AudioUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let attempted = match self {
            AppError::AudioUnavailable { attempted, .. } => Some(attempted.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
            attempted,
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ExternalServiceError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ExternalServiceError(format!("JSON decoding error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("I/O error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
