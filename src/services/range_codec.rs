//! Conversion between stored memorization-range strings and [`AyahRange`].
//!
//! Current format: `"Al-Baqarah Ayah 1-10"` or
//! `"Al-Baqarah Ayah 1 - Al-Imran Ayah 10"`. Two older formats are still
//! read (`"Al-Baqarah 1-10"` and `"Al-Baqarah 1-10, Al-Imran"`) but never
//! written.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    constants::surahs::{find_surah, find_surah_by_name},
    models::domain::AyahRange,
};

static CROSS_SURAH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+Ayah\s+([0-9]+)\s+-\s+(.+?)\s+Ayah\s+([0-9]+)$")
        .expect("CROSS_SURAH_REGEX is a valid regex pattern")
});

static SINGLE_SURAH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+Ayah\s+([0-9]+)-([0-9]+)$")
        .expect("SINGLE_SURAH_REGEX is a valid regex pattern")
});

static LEGACY_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+([0-9]+)-([0-9]+)$").expect("LEGACY_RANGE_REGEX is a valid regex pattern")
});

enum MatchOutcome {
    /// The text does not have this matcher's shape; try the next one.
    NoMatch,
    /// The text has this shape. `None` means a name or number did not resolve.
    Matched(Option<AyahRange>),
}

type RangeMatcher = fn(&str) -> MatchOutcome;

/// Tried in order, first match wins.
const RANGE_MATCHERS: [(&str, RangeMatcher); 4] = [
    ("cross-surah", match_cross_surah),
    ("single-surah", match_single_surah),
    ("legacy comma", match_legacy_comma),
    ("legacy bare", match_legacy_bare),
];

/// Parses a stored range. Empty text yields the unset range; text that fits
/// no known format, or names an unknown surah, yields `None`.
///
/// Ayah ordering and bounds are not checked here, see [`AyahRange::validate`].
pub fn parse_range(text: &str) -> Option<AyahRange> {
    if text.trim().is_empty() {
        return Some(AyahRange::unset());
    }

    for (format_name, matcher) in RANGE_MATCHERS {
        if let MatchOutcome::Matched(range) = matcher(text) {
            if range.is_none() {
                log::debug!("'{}' looks like a {} range but did not resolve", text, format_name);
            }
            return range;
        }
    }

    None
}

/// Formats a range in the current format. Incomplete ranges format to "".
pub fn format_range(range: &AyahRange) -> String {
    let (Some(start_surah), Some(start_ayah), Some(end_ayah)) =
        (range.start_surah, range.start_ayah, range.end_ayah)
    else {
        return String::new();
    };
    let Some(start) = find_surah(start_surah) else {
        return String::new();
    };

    if range.is_cross_surah {
        if let Some(end) = range.end_surah.and_then(find_surah) {
            return format!(
                "{} Ayah {} - {} Ayah {}",
                start.name, start_ayah, end.name, end_ayah
            );
        }
    }

    format!("{} Ayah {}-{}", start.name, start_ayah, end_ayah)
}

/// Text for list views: "-" when empty, the current format when the text
/// parses, the stored text unchanged otherwise.
pub fn display_range(text: &str) -> String {
    match parse_range(text) {
        Some(range) if range.is_unset() => "-".to_string(),
        Some(range) if range.is_complete() => format_range(&range),
        _ => text.to_string(),
    }
}

fn number(captures: &Captures<'_>, index: usize) -> Option<u16> {
    captures.get(index)?.as_str().parse().ok()
}

fn surah_number(name: &str) -> Option<u16> {
    find_surah_by_name(name).map(|surah| surah.number)
}

fn match_cross_surah(text: &str) -> MatchOutcome {
    let Some(caps) = CROSS_SURAH_REGEX.captures(text) else {
        return MatchOutcome::NoMatch;
    };

    MatchOutcome::Matched((|| {
        Some(AyahRange::cross(
            surah_number(&caps[1])?,
            number(&caps, 2)?,
            surah_number(&caps[3])?,
            number(&caps, 4)?,
        ))
    })())
}

fn match_single_surah(text: &str) -> MatchOutcome {
    let Some(caps) = SINGLE_SURAH_REGEX.captures(text) else {
        return MatchOutcome::NoMatch;
    };

    MatchOutcome::Matched((|| {
        Some(AyahRange::single(
            surah_number(&caps[1])?,
            number(&caps, 2)?,
            number(&caps, 3)?,
        ))
    })())
}

fn match_legacy_comma(text: &str) -> MatchOutcome {
    let parts: Vec<&str> = text.split(',').collect();
    match parts.as_slice() {
        [_] => MatchOutcome::NoMatch,
        [first, end_name] => MatchOutcome::Matched((|| {
            let caps = LEGACY_RANGE_REGEX.captures(first.trim())?;
            Some(AyahRange::cross(
                surah_number(&caps[1])?,
                number(&caps, 2)?,
                surah_number(end_name.trim())?,
                number(&caps, 3)?,
            ))
        })()),
        // Three or more parts never had a defined meaning.
        _ => MatchOutcome::Matched(None),
    }
}

fn match_legacy_bare(text: &str) -> MatchOutcome {
    let Some(caps) = LEGACY_RANGE_REGEX.captures(text) else {
        return MatchOutcome::NoMatch;
    };

    MatchOutcome::Matched((|| {
        Some(AyahRange::single(
            surah_number(&caps[1])?,
            number(&caps, 2)?,
            number(&caps, 3)?,
        ))
    })())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::surahs::SURAHS;

    #[test]
    fn parses_single_surah_canonical_form() {
        assert_eq!(
            parse_range("Al-Baqarah Ayah 1-10"),
            Some(AyahRange::single(2, 1, 10))
        );
    }

    #[test]
    fn parses_cross_surah_canonical_form() {
        assert_eq!(
            parse_range("Al-Baqarah Ayah 1 - Al-Imran Ayah 10"),
            Some(AyahRange::cross(2, 1, 3, 10))
        );
    }

    #[test]
    fn parses_legacy_bare_form() {
        assert_eq!(
            parse_range("Al-Baqarah 5-10"),
            Some(AyahRange {
                start_surah: Some(2),
                start_ayah: Some(5),
                end_ayah: Some(10),
                end_surah: None,
                is_cross_surah: false,
            })
        );
    }

    #[test]
    fn parses_legacy_comma_form() {
        assert_eq!(
            parse_range("Al-Baqarah 5-10, Al-Imran"),
            Some(AyahRange::cross(2, 5, 3, 10))
        );
    }

    #[test]
    fn legacy_comma_form_with_three_parts_fails() {
        assert_eq!(parse_range("Al-Baqarah 5-10, Al-Imran, An-Nisa"), None);
    }

    #[test]
    fn unknown_surah_names_fail() {
        assert_eq!(parse_range("NotASurah Ayah 1-5"), None);
        assert_eq!(parse_range("Al-Baqarah Ayah 1 - NotASurah Ayah 5"), None);
        assert_eq!(parse_range("NotASurah 1-5"), None);
        assert_eq!(parse_range("Al-Baqarah 1-5, NotASurah"), None);
    }

    #[test]
    fn names_are_matched_exactly() {
        assert_eq!(parse_range("al-baqarah Ayah 1-5"), None);
        assert_eq!(parse_range("Surah Al-Fatiha Ayah 1-7"), None);
    }

    #[test]
    fn empty_input_is_unset_not_failure() {
        assert_eq!(parse_range(""), Some(AyahRange::unset()));
        assert_eq!(parse_range("   "), Some(AyahRange::unset()));
    }

    #[test]
    fn unrecognised_text_fails() {
        assert_eq!(parse_range("Al-Baqarah"), None);
        assert_eq!(parse_range("Al-Baqarah Ayah 5"), None);
        assert_eq!(parse_range("1-10"), None);
    }

    #[test]
    fn ordering_is_not_enforced_by_the_parser() {
        assert_eq!(
            parse_range("Al-Fatiha Ayah 7-2"),
            Some(AyahRange::single(1, 7, 2))
        );
    }

    #[test]
    fn oversized_ayah_numbers_fail() {
        assert_eq!(parse_range("Al-Fatiha Ayah 1-999999"), None);
    }

    #[test]
    fn hyphenated_names_parse() {
        assert_eq!(parse_range("Ta-Ha Ayah 1-5"), Some(AyahRange::single(20, 1, 5)));
        assert_eq!(parse_range("Ya-Sin 1-12"), Some(AyahRange::single(36, 1, 12)));
    }

    #[test]
    fn format_emits_current_format() {
        assert_eq!(format_range(&AyahRange::single(2, 1, 10)), "Al-Baqarah Ayah 1-10");
        assert_eq!(
            format_range(&AyahRange::cross(2, 1, 3, 10)),
            "Al-Baqarah Ayah 1 - Al-Imran Ayah 10"
        );
    }

    #[test]
    fn format_of_incomplete_range_is_empty() {
        assert_eq!(format_range(&AyahRange::unset()), "");
        let partial = AyahRange {
            start_surah: Some(2),
            start_ayah: Some(1),
            ..AyahRange::default()
        };
        assert_eq!(format_range(&partial), "");
        assert_eq!(format_range(&AyahRange::single(200, 1, 2)), "");
    }

    #[test]
    fn cross_flag_without_end_surah_formats_as_single() {
        let range = AyahRange {
            end_surah: None,
            ..AyahRange::cross(2, 1, 3, 10)
        };
        assert_eq!(format_range(&range), "Al-Baqarah Ayah 1-10");
    }

    #[test]
    fn format_then_parse_round_trips_for_every_surah() {
        for surah in SURAHS.iter() {
            let single = AyahRange::single(surah.number, 1, surah.ayah_count);
            assert_eq!(parse_range(&format_range(&single)), Some(single));

            if surah.number < 114 {
                let cross = AyahRange::cross(surah.number, surah.ayah_count, surah.number + 1, 3);
                assert_eq!(parse_range(&format_range(&cross)), Some(cross));
            }
        }
    }

    #[test]
    fn legacy_text_normalizes_to_current_format() {
        let range = parse_range("Al-Baqarah 5-10, Al-Imran").expect("legacy text parses");
        assert_eq!(format_range(&range), "Al-Baqarah Ayah 5 - Al-Imran Ayah 10");
    }

    #[test]
    fn display_range_handles_all_shapes() {
        assert_eq!(display_range(""), "-");
        assert_eq!(display_range("  "), "-");
        assert_eq!(display_range("Al-Baqarah 5-10"), "Al-Baqarah Ayah 5-10");
        assert_eq!(display_range("revised whole juz"), "revised whole juz");
    }
}
