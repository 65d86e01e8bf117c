use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{
    AyahRange, HistoryEntry, Question, QuizSession, SessionStats, TestMode,
};

#[derive(Debug, Serialize)]
pub struct ParseRangeResponse {
    pub range: Option<AyahRange>,
    pub canonical: Option<String>,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct FormatRangeResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSessionDto {
    pub id: Uuid,
    pub mode: TestMode,
    pub selection: BTreeSet<u16>,
    pub question: Option<Question>,
    pub history: Vec<HistoryEntry>,
    pub stats: SessionStats,
    pub started_at: DateTime<Utc>,
}

impl From<&QuizSession> for QuizSessionDto {
    fn from(session: &QuizSession) -> Self {
        QuizSessionDto {
            id: session.id,
            mode: session.mode,
            selection: session.selection.clone(),
            question: session.current_question.clone(),
            history: session.history.clone(),
            stats: session.stats(),
            started_at: session.started_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    pub message: String,
    pub stats: SessionStats,
}
