use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{AyahLocation, AyahText};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestMode {
    Surah,
    Juz,
}

impl std::fmt::Display for TestMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestMode::Surah => write!(f, "surah"),
            TestMode::Juz => write!(f, "juz"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub location: AyahLocation,
    pub result: TestResult,
    pub timestamp: DateTime<Utc>,
}

/// The prompt ayah and the ayahs the student is expected to recite after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub location: AyahLocation,
    pub surah_name: String,
    pub text: String,
    pub next_ayahs: Vec<AyahText>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub accuracy: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub mode: TestMode,
    pub selection: BTreeSet<u16>,
    pub current_ayah: Option<AyahLocation>,
    pub current_question: Option<Question>,
    pub history: Vec<HistoryEntry>,
    pub generation: u64,
    pub started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(mode: TestMode, selection: BTreeSet<u16>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            selection,
            current_ayah: None,
            current_question: None,
            history: Vec::new(),
            generation: 0,
            started_at: Utc::now(),
        }
    }

    /// Records a result for the ayah currently on screen.
    pub fn record(&mut self, result: TestResult) -> Option<&HistoryEntry> {
        let location = self.current_ayah?;
        self.history.push(HistoryEntry {
            location,
            result,
            timestamp: Utc::now(),
        });
        self.history.last()
    }

    /// Starts a new question load; any load holding an older generation is stale.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a loaded question unless a newer load has started since.
    pub fn apply_question(&mut self, generation: u64, question: Question) -> bool {
        if generation != self.generation {
            return false;
        }
        self.current_ayah = Some(question.location);
        self.current_question = Some(question);
        true
    }

    pub fn stats(&self) -> SessionStats {
        let total = self.history.len();
        let correct = self
            .history
            .iter()
            .filter(|entry| entry.result == TestResult::Correct)
            .count();
        let accuracy = if total > 0 {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        SessionStats {
            total,
            correct,
            incorrect: total - correct,
            accuracy,
        }
    }
}
