use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{AudioService, QuizSampler, QuizSessionService, QuranTextService},
};

#[derive(Clone)]
pub struct AppState {
    pub text_service: Arc<QuranTextService>,
    pub quiz_sampler: Arc<QuizSampler>,
    pub quiz_session_service: Arc<QuizSessionService>,
    pub audio_service: Arc<AudioService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let text_service = Arc::new(QuranTextService::from_config(&config)?);
        let audio_service = Arc::new(AudioService::from_config(&config)?);

        Ok(Self::with_services(text_service, audio_service, config))
    }

    /// Wires the quiz services on top of an already built text source and
    /// audio resolver.
    pub fn with_services(
        text_service: Arc<QuranTextService>,
        audio_service: Arc<AudioService>,
        config: Config,
    ) -> Self {
        let quiz_sampler = Arc::new(QuizSampler::new(
            text_service.clone(),
            config.next_ayah_count,
        ));
        let quiz_session_service = Arc::new(QuizSessionService::new(quiz_sampler.clone()));

        Self {
            text_service,
            quiz_sampler,
            quiz_session_service,
            audio_service,
            config: Arc::new(config),
        }
    }
}
