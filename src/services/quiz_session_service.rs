use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    constants::{juz::JUZ_COUNT, surahs::SURAH_COUNT},
    errors::{AppError, AppResult},
    models::{
        domain::{QuizSession, TestMode, TestResult},
        dto::response::{EndSessionResponse, QuizSessionDto},
    },
    services::quiz_sampler::{pick_random_ayah, QuizSampler},
};

/// In-memory self-test sessions. Nothing here outlives the process.
pub struct QuizSessionService {
    sampler: Arc<QuizSampler>,
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl QuizSessionService {
    pub fn new(sampler: Arc<QuizSampler>) -> Self {
        Self {
            sampler,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn start_session(
        &self,
        mode: TestMode,
        selection: Vec<u16>,
    ) -> AppResult<QuizSessionDto> {
        let selection = Self::validate_selection(mode, selection)?;

        let eligible = self.sampler.enumerate_eligible_ayahs(mode, &selection).await;
        if eligible.is_empty() {
            return Err(AppError::NoAyahsAvailable(format!(
                "no ayahs with text are available for the selected {}",
                mode
            )));
        }

        let location = pick_random_ayah(&eligible)?;
        let question = self.sampler.load_question(location).await?;

        let mut session = QuizSession::new(mode, selection);
        let generation = session.next_generation();
        session.apply_question(generation, question);

        log::info!(
            "Started {} quiz session {} over {} eligible ayahs",
            mode,
            session.id,
            eligible.len()
        );

        let dto = QuizSessionDto::from(&session);
        self.sessions.write().await.insert(session.id, session);
        Ok(dto)
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<QuizSessionDto> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .map(QuizSessionDto::from)
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn mark_correct(&self, id: &Uuid) -> AppResult<QuizSessionDto> {
        self.advance(id, Some(TestResult::Correct)).await
    }

    pub async fn mark_incorrect(&self, id: &Uuid) -> AppResult<QuizSessionDto> {
        self.advance(id, Some(TestResult::Incorrect)).await
    }

    pub async fn skip(&self, id: &Uuid) -> AppResult<QuizSessionDto> {
        self.advance(id, None).await
    }

    pub async fn end_session(&self, id: &Uuid) -> AppResult<EndSessionResponse> {
        let session = self
            .sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| Self::not_found(id))?;

        let stats = session.stats();
        log::info!(
            "Ended quiz session {} ({} answered, {}% correct)",
            id,
            stats.total,
            stats.accuracy
        );

        Ok(EndSessionResponse {
            message: format!("Quiz session '{}' ended", id),
            stats,
        })
    }

    /// Loads a new question, then records `result` for the ayah that was on
    /// screen (if any). Nothing is recorded unless the new question is
    /// installed, and a load overtaken by a newer one is dropped on arrival.
    async fn advance(&self, id: &Uuid, result: Option<TestResult>) -> AppResult<QuizSessionDto> {
        let (mode, selection, generation) = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
            (session.mode, session.selection.clone(), session.next_generation())
        };

        let eligible = self.sampler.enumerate_eligible_ayahs(mode, &selection).await;
        let location = pick_random_ayah(&eligible)?;
        let question = self.sampler.load_question(location).await?;

        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        if session.generation != generation {
            log::debug!(
                "Discarded stale question for session {} (generation {} < {})",
                id,
                generation,
                session.generation
            );
            return Ok(QuizSessionDto::from(&*session));
        }

        if let Some(result) = result {
            session.record(result);
        }
        session.apply_question(generation, question);

        Ok(QuizSessionDto::from(&*session))
    }

    fn validate_selection(mode: TestMode, selection: Vec<u16>) -> AppResult<BTreeSet<u16>> {
        if selection.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Please select at least one {} to test",
                mode
            )));
        }

        let max = match mode {
            TestMode::Surah => SURAH_COUNT,
            TestMode::Juz => JUZ_COUNT,
        };
        if let Some(invalid) = selection.iter().find(|&&n| n == 0 || n > max) {
            return Err(AppError::ValidationError(format!(
                "{} {} does not exist (expected 1-{})",
                mode, invalid, max
            )));
        }

        Ok(selection.into_iter().collect())
    }

    fn not_found(id: &Uuid) -> AppError {
        AppError::NotFound(format!("Quiz session with id '{}' not found", id))
    }
}
