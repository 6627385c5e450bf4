//! English single date-point extractor.

use chrono::NaiveDateTime;
use datespan_core::{
    DatePointExtractor, EntityExtractor, EntityKind, PatternMatch, RecognizedEntity, Result,
    YEAR_GROUP_NAME,
};

use super::RegexTable;

/// Two-digit years at or above this value belong to the 1900s, below it to
/// the 2000s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 40;

const DATE_PATTERNS: &[(&str, &str)] = &[
    // "3 days ago", "two weeks from today"; listed first so "today" is not
    // claimed on its own.
    (
        "relative_duration",
        r"(?i)\b{NUM}\s+(?:business\s+)?(?:days?|weeks?|months?|years?|fortnights?)\s+(?:ago|later|from\s+now|(?:before|after|from)\s+(?:the\s+)?{RELATIVE_DAY})\b",
    ),
    ("iso", r"\b{YEAR}-(?:1[0-2]|0?[1-9])-{DAY}\b"),
    ("numeric", r"\b(?:1[0-2]|0?[1-9])/{DAY}(?:/(?:\d{4}|\d{2}))?\b"),
    (
        "month_day",
        r"(?i)\b{MONTH}\.?\s+(?:the\s+)?{DAY}{ORD}(?:\s*,?\s*{YEAR})?\b",
    ),
    (
        "day_month",
        r"(?i)\b(?:the\s+)?{DAY}{ORD}\s+(?:of\s+)?{MONTH}\b(?:\s*,?\s*{YEAR}\b)?",
    ),
    (
        "relative_day",
        r"(?i)\b(?:the\s+day\s+(?:before|after)\s+)?(?:today|tomorrow|tmr|yesterday)\b",
    ),
    (
        "weekday",
        r"(?i)\b(?:(?:this|next|last|coming|previous)\s+)?{WEEKDAY}\b",
    ),
];

/// Regex-based extractor for single English dates.
#[derive(Debug, Clone)]
pub struct EnglishDateExtractor {
    table: RegexTable,
}

impl EnglishDateExtractor {
    /// Compile the date patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: RegexTable::new(EntityKind::Date, DATE_PATTERNS)?,
        })
    }
}

impl EntityExtractor for EnglishDateExtractor {
    fn extract(&self, text: &str, _reference: NaiveDateTime) -> Vec<RecognizedEntity> {
        self.table.scan(text)
    }
}

impl DatePointExtractor for EnglishDateExtractor {
    fn year_from_text(&self, year_match: &PatternMatch) -> Option<i32> {
        let digits = year_match
            .group(YEAR_GROUP_NAME)
            .unwrap_or(&year_match.value)
            .trim();
        let year: i32 = digits.parse().ok()?;

        Some(match year {
            TWO_DIGIT_YEAR_PIVOT..=99 => 1900 + year,
            0..TWO_DIGIT_YEAR_PIVOT => 2000 + year,
            _ => year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid reference date")
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn texts(text: &str) -> Vec<String> {
        EnglishDateExtractor::new()
            .expect("date patterns should compile")
            .extract(text, reference())
            .into_iter()
            .map(|e| e.text)
            .collect()
    }

    fn year_match(value: &str, year: Option<&str>) -> PatternMatch {
        let mut named_groups = BTreeMap::new();
        if let Some(year) = year {
            named_groups.insert(YEAR_GROUP_NAME.to_string(), year.to_string());
        }
        PatternMatch {
            index: 0,
            length: value.len(),
            value: value.to_string(),
            named_groups,
        }
    }

    #[test]
    fn test_month_day_pairs() {
        assert_eq!(
            texts("from January 1 to January 5"),
            vec!["January 1", "January 5"]
        );
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(texts("Feb 1st 2018"), vec!["Feb 1st 2018"]);
    }

    #[test]
    fn test_month_with_year_only_is_not_a_date() {
        assert!(texts("January 2018").is_empty());
    }

    #[test]
    fn test_relative_duration_claims_today() {
        assert_eq!(texts("within 3 days from today"), vec!["3 days from today"]);
        assert_eq!(texts("see you tomorrow"), vec!["tomorrow"]);
    }

    #[test]
    fn test_iso_and_weekday() {
        assert_eq!(
            texts("2018-03-05 or next friday"),
            vec!["2018-03-05", "next friday"]
        );
    }

    #[test]
    fn test_bare_ordinal_is_not_a_date() {
        assert!(texts("the 2nd century").is_empty());
        assert!(texts("week of the 18th").is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_year_from_text() {
        let extractor = EnglishDateExtractor::new().expect("date patterns should compile");

        assert_eq!(
            extractor.year_from_text(&year_match("1999", Some("1999"))),
            Some(1999)
        );
        assert_eq!(extractor.year_from_text(&year_match("2100", None)), Some(2100));
        assert_eq!(extractor.year_from_text(&year_match("'85", Some("85"))), Some(1985));
        assert_eq!(extractor.year_from_text(&year_match("07", None)), Some(2007));
        assert_eq!(extractor.year_from_text(&year_match("ninety", None)), None);
    }
}
