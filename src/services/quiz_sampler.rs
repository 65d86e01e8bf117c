use std::{collections::BTreeSet, sync::Arc};

use futures::future::join_all;
use rand::{seq::SliceRandom, Rng};

use crate::{
    constants::{juz::find_juz, surahs::find_surah},
    errors::{AppError, AppResult},
    models::domain::{AyahLocation, AyahText, JuzRef, Question, SurahRef, TestMode},
    services::quran_text_service::QuranTextService,
};

/// Every location a selection covers, before any availability filtering.
pub fn candidate_locations(mode: TestMode, selection: &BTreeSet<u16>) -> Vec<AyahLocation> {
    selection
        .iter()
        .flat_map(|&number| match mode {
            TestMode::Surah => find_surah(number).map(surah_locations).unwrap_or_default(),
            TestMode::Juz => find_juz(number).map(juz_locations).unwrap_or_default(),
        })
        .collect()
}

fn surah_locations(surah: &SurahRef) -> Vec<AyahLocation> {
    (1..=surah.ayah_count)
        .map(|ayah| AyahLocation::new(surah.number, ayah))
        .collect()
}

/// Start surah from `start_ayah` to its end, middle surahs whole, end surah
/// up to `end_ayah`. A single-surah juz is just `start_ayah..=end_ayah`.
fn juz_locations(juz: &JuzRef) -> Vec<AyahLocation> {
    (juz.start_surah..=juz.end_surah)
        .filter_map(find_surah)
        .flat_map(|surah| {
            let from = if surah.number == juz.start_surah {
                juz.start_ayah
            } else {
                1
            };
            let to = if surah.number == juz.end_surah {
                juz.end_ayah
            } else {
                surah.ayah_count
            };
            (from..=to).map(move |ayah| AyahLocation::new(surah.number, ayah))
        })
        .collect()
}

pub fn pick_random_ayah(eligible: &[AyahLocation]) -> AppResult<AyahLocation> {
    pick_random_ayah_with(&mut rand::thread_rng(), eligible)
}

/// Uniform pick; consecutive picks may repeat.
pub fn pick_random_ayah_with<R: Rng + ?Sized>(
    rng: &mut R,
    eligible: &[AyahLocation],
) -> AppResult<AyahLocation> {
    eligible.choose(rng).copied().ok_or_else(|| {
        AppError::NoAyahsAvailable("no ayahs with text in the selected range".to_string())
    })
}

/// Text shown in place of an ayah the source cannot provide.
pub fn placeholder_for(surah: &SurahRef, ayah: u16) -> String {
    if ayah > surah.ayah_count {
        format!("[End of {}]", surah.name)
    } else {
        format!("[Ayah {} not available]", ayah)
    }
}

pub struct QuizSampler {
    text_source: Arc<QuranTextService>,
    next_ayah_count: u16,
}

impl QuizSampler {
    pub fn new(text_source: Arc<QuranTextService>, next_ayah_count: u16) -> Self {
        Self {
            text_source,
            next_ayah_count,
        }
    }

    pub fn text_source(&self) -> &Arc<QuranTextService> {
        &self.text_source
    }

    /// Locations in the selection whose text is available. Empty when the
    /// selection is empty or nothing in it has text.
    pub async fn enumerate_eligible_ayahs(
        &self,
        mode: TestMode,
        selection: &BTreeSet<u16>,
    ) -> Vec<AyahLocation> {
        if selection.is_empty() {
            return Vec::new();
        }

        let text = self.text_source.snapshot().await;
        let eligible: Vec<AyahLocation> = candidate_locations(mode, selection)
            .into_iter()
            .filter(|location| text.has_ayah(*location))
            .collect();

        log::debug!(
            "{} eligible ayahs for {} selection {:?}",
            eligible.len(),
            mode,
            selection
        );
        eligible
    }

    /// Looks up one ayah, substituting a placeholder when it is unavailable.
    pub async fn lookup(&self, location: AyahLocation) -> AppResult<AyahText> {
        let surah = find_surah(location.surah).ok_or_else(|| {
            AppError::ValidationError(format!("unknown surah number {}", location.surah))
        })?;

        Ok(match self.text_source.text_at(location).await {
            Some(text) => AyahText {
                ayah: location.ayah,
                text,
                available: true,
            },
            None => AyahText {
                ayah: location.ayah,
                text: placeholder_for(surah, location.ayah),
                available: false,
            },
        })
    }

    /// The prompt ayah plus the next ayahs in its surah. All lookups run
    /// concurrently and each degrades to a placeholder on its own.
    pub async fn load_question(&self, location: AyahLocation) -> AppResult<Question> {
        let surah = find_surah(location.surah).ok_or_else(|| {
            AppError::ValidationError(format!("unknown surah number {}", location.surah))
        })?;
        if location.ayah == 0 || location.ayah > surah.ayah_count {
            return Err(AppError::ValidationError(format!(
                "{} has no ayah {}",
                surah.name, location.ayah
            )));
        }

        let lookups = (0..=self.next_ayah_count).map(|offset| self.lookup(location.offset(offset)));
        let mut slots = join_all(lookups)
            .await
            .into_iter()
            .collect::<AppResult<Vec<AyahText>>>()?
            .into_iter();

        let text = slots
            .next()
            .filter(|slot| slot.available)
            .map(|slot| slot.text)
            .unwrap_or_default();

        Ok(Question {
            location,
            surah_name: surah.name.to_string(),
            text,
            next_ayahs: slots.collect(),
        })
    }
}
