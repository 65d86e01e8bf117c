use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::AyahLocation;

/// Full (or partial) Quran text keyed surah -> ayah -> text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuranText {
    surahs: BTreeMap<u16, BTreeMap<u16, String>>,
}

impl QuranText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surah: u16, ayah: u16, text: impl Into<String>) {
        self.surahs
            .entry(surah)
            .or_default()
            .insert(ayah, text.into());
    }

    pub fn text_at(&self, location: AyahLocation) -> Option<&str> {
        self.surahs
            .get(&location.surah)?
            .get(&location.ayah)
            .map(String::as_str)
    }

    pub fn has_ayah(&self, location: AyahLocation) -> bool {
        self.text_at(location).is_some()
    }

    pub fn total_surahs(&self) -> usize {
        self.surahs.len()
    }

    pub fn total_ayahs(&self) -> usize {
        self.surahs.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.values().all(BTreeMap::is_empty)
    }

    /// Ayah numbers present for a surah, ascending.
    #[cfg(test)]
    pub fn surah_ayahs(&self, surah: u16) -> Vec<u16> {
        self.surahs
            .get(&surah)
            .map(|ayahs| ayahs.keys().copied().collect())
            .unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<(u16, u16, S)> for QuranText {
    fn from_iter<I: IntoIterator<Item = (u16, u16, S)>>(iter: I) -> Self {
        let mut text = QuranText::new();
        for (surah, ayah, value) in iter {
            text.insert(surah, ayah, value);
        }
        text
    }
}

/// Which tier the currently served text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSourceKind {
    Remote,
    Sample,
    None,
}

impl std::fmt::Display for TextSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextSourceKind::Remote => write!(f, "remote"),
            TextSourceKind::Sample => write!(f, "sample"),
            TextSourceKind::None => write!(f, "none"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextSourceStats {
    pub loaded: bool,
    pub source: TextSourceKind,
    pub total_surahs: usize,
    pub total_ayahs: usize,
    pub cache_age_minutes: i64,
    pub is_cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}
