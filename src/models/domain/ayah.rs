use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::surahs::find_surah,
    errors::{AppError, AppResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct AyahLocation {
    pub surah: u16,
    pub ayah: u16,
}

impl AyahLocation {
    pub fn new(surah: u16, ayah: u16) -> Self {
        Self { surah, ayah }
    }

    /// The location `offset` ayahs further on in the same surah.
    pub fn offset(&self, offset: u16) -> Self {
        Self {
            surah: self.surah,
            ayah: self.ayah.saturating_add(offset),
        }
    }
}

impl fmt::Display for AyahLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

/// Result of a single text lookup. `available == false` means `text` is a placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AyahText {
    pub ayah: u16,
    pub text: String,
    pub available: bool,
}

/// Structured memorization range, as edited in the progress forms.
///
/// Every field is optional so that a half-filled form (or an empty stored
/// string) has a representation; the default value is the "unset" state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AyahRange {
    pub start_surah: Option<u16>,
    pub start_ayah: Option<u16>,
    pub end_ayah: Option<u16>,
    pub end_surah: Option<u16>,
    #[serde(default)]
    pub is_cross_surah: bool,
}

impl AyahRange {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn single(surah: u16, start_ayah: u16, end_ayah: u16) -> Self {
        Self {
            start_surah: Some(surah),
            start_ayah: Some(start_ayah),
            end_ayah: Some(end_ayah),
            end_surah: None,
            is_cross_surah: false,
        }
    }

    pub fn cross(start_surah: u16, start_ayah: u16, end_surah: u16, end_ayah: u16) -> Self {
        Self {
            start_surah: Some(start_surah),
            start_ayah: Some(start_ayah),
            end_ayah: Some(end_ayah),
            end_surah: Some(end_surah),
            is_cross_surah: true,
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// True when every field needed to format the range is present.
    pub fn is_complete(&self) -> bool {
        self.start_surah.is_some()
            && self.start_ayah.is_some()
            && self.end_ayah.is_some()
            && (!self.is_cross_surah || self.end_surah.is_some())
    }

    /// Form-level checks. The parser accepts out-of-order or
    /// out-of-bounds numbers; this is where they are rejected.
    pub fn validate(&self) -> AppResult<()> {
        let (Some(start_surah), Some(start_ayah), Some(end_ayah)) =
            (self.start_surah, self.start_ayah, self.end_ayah)
        else {
            return Err(AppError::ValidationError(
                "start surah, start ayah and end ayah are required".to_string(),
            ));
        };

        let start = find_surah(start_surah).ok_or_else(|| {
            AppError::ValidationError(format!("unknown surah number {}", start_surah))
        })?;

        if start_ayah == 0 || start_ayah > start.ayah_count {
            return Err(AppError::ValidationError(format!(
                "{} has {} ayahs, start ayah {} is out of range",
                start.name, start.ayah_count, start_ayah
            )));
        }

        if !self.is_cross_surah {
            if self.end_surah.is_some() {
                return Err(AppError::ValidationError(
                    "end surah is only allowed for cross-surah ranges".to_string(),
                ));
            }
            if end_ayah < start_ayah || end_ayah > start.ayah_count {
                return Err(AppError::ValidationError(format!(
                    "end ayah {} must be between {} and {}",
                    end_ayah, start_ayah, start.ayah_count
                )));
            }
            return Ok(());
        }

        let end_surah = self.end_surah.ok_or_else(|| {
            AppError::ValidationError("cross-surah range requires an end surah".to_string())
        })?;
        if end_surah <= start_surah {
            return Err(AppError::ValidationError(format!(
                "end surah {} must come after start surah {}",
                end_surah, start_surah
            )));
        }
        let end = find_surah(end_surah).ok_or_else(|| {
            AppError::ValidationError(format!("unknown surah number {}", end_surah))
        })?;
        if end_ayah == 0 || end_ayah > end.ayah_count {
            return Err(AppError::ValidationError(format!(
                "{} has {} ayahs, end ayah {} is out of range",
                end.name, end.ayah_count, end_ayah
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_unset() {
        let range = AyahRange::default();
        assert!(range.is_unset());
        assert!(!range.is_complete());
    }

    #[test]
    fn validate_accepts_well_formed_ranges() {
        assert!(AyahRange::single(1, 1, 7).validate().is_ok());
        assert!(AyahRange::cross(2, 280, 3, 10).validate().is_ok());
    }

    #[test]
    fn validate_rejects_reversed_single_surah_range() {
        let err = AyahRange::single(2, 10, 5).validate().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn validate_rejects_ayah_past_end_of_surah() {
        assert!(AyahRange::single(1, 1, 8).validate().is_err());
        assert!(AyahRange::single(1, 0, 3).validate().is_err());
        assert!(AyahRange::cross(1, 5, 2, 287).validate().is_err());
    }

    #[test]
    fn validate_rejects_backwards_cross_surah_range() {
        assert!(AyahRange::cross(3, 1, 2, 10).validate().is_err());
        assert!(AyahRange::cross(3, 1, 3, 10).validate().is_err());
    }

    #[test]
    fn validate_rejects_incomplete_range() {
        let range = AyahRange {
            start_surah: Some(2),
            ..AyahRange::default()
        };
        assert!(range.validate().is_err());
    }

    #[test]
    fn location_offset_stays_in_surah() {
        let location = AyahLocation::new(1, 6);
        assert_eq!(location.offset(2), AyahLocation::new(1, 8));
        assert_eq!(location.to_string(), "1:6");
    }
}
