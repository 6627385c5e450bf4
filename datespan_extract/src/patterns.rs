//! Configurable pattern table for date-period extraction.
//!
//! Patterns are plain strings so a locale can be supplied from configuration
//! rather than hardcoded; [`PatternTable::compile`] turns them into regexes
//! once, at construction time.

use datespan_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::english::vocabulary::expand;

/// Raw pattern strings, one field per pattern the engine consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternTable {
    /// Self-contained date ranges matched directly against the input.
    pub simple_cases: Vec<String>,
    /// A single calendar year; should expose a `year` group.
    pub year: String,
    /// A year surrounded by hyphens, checked on a 6-character window.
    pub illegal_year: String,
    pub till: String,
    /// Connector tokens accepted between two dates when preceded by "between".
    pub range_connector: String,
    pub date_unit: String,
    pub time_unit: String,
    /// "within (the next)"; the `next` group flags a forward-looking window.
    pub within_next_prefix: String,
    pub past: String,
    pub future: String,
    pub future_suffix: String,
    pub week_of: String,
    pub month_of: String,
    pub less_than: String,
    pub more_than: String,
    pub ago: String,
    pub later: String,
    pub year_period: String,
    pub century_suffix: String,
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::english()
    }
}

impl PatternTable {
    /// Default English pattern table.
    #[must_use]
    pub fn english() -> Self {
        Self {
            simple_cases: english_simple_cases(),
            year: expand(r"(?i)\b(?P<year>{YEAR})\b"),
            illegal_year: expand(r"-{YEAR}-"),
            till: expand(r"(?i){TILL}(?:\s+the\b)?"),
            range_connector: expand(r"(?i){CONNECTOR}"),
            date_unit: r"(?i)\b(?:decades?|years?|months?|weeks?|(?:business\s+)?days?|fortnights?)\b"
                .to_string(),
            time_unit: r"(?i)\b(?:hours?|hrs?|minutes?|mins?|seconds?|secs?)\b".to_string(),
            within_next_prefix:
                r"(?i)\bwithin(?:\s+the)?(?:\s+(?P<next>following|next|upcoming|coming))?\b"
                    .to_string(),
            past: r"(?i)\b(?:last|past|previous|current)\b".to_string(),
            future: r"(?i)\b(?:following|next|upcoming|coming)\b".to_string(),
            future_suffix: r"(?i)\b(?:in\s+the\s+)?(?:future|hence)\b".to_string(),
            week_of: r"(?i)(?:\bthe\s+)?(?:\bweek\s+(?:of|(?:commencing|starting|beginning)(?:\s+on)?)|\bw/c)(?:\s+the)?\b"
                .to_string(),
            month_of: r"(?i)\bmonth\s*of\b".to_string(),
            less_than: r"(?i)\bless\s+than\b".to_string(),
            more_than: r"(?i)\bmore\s+than\b".to_string(),
            ago: r"(?i)\b(?:ago|before\s+(?:yesterday|today))\b".to_string(),
            later: r"(?i)\b(?:later|from\s+now|(?:from|after)\s+(?:the\s+)?(?:tomorrow|tmr|today))\b"
                .to_string(),
            year_period: expand(
                r"(?i)(?:(?:\b(?:from|during|in)\s+)?\b{YEAR}\s*{TILL}\s*{YEAR}\b|\bbetween\s+{YEAR}\s*{CONNECTOR}\s*{YEAR}\b)",
            ),
            century_suffix: r"(?i)^century\b".to_string(),
        }
    }

    /// Compile every pattern.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] naming the first pattern that fails.
    pub fn compile(&self) -> Result<CompiledPatterns> {
        let simple_cases = self
            .simple_cases
            .iter()
            .enumerate()
            .map(|(i, p)| compile(&format!("simple_cases[{i}]"), p))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledPatterns {
            simple_cases,
            year: compile("year", &self.year)?,
            illegal_year: compile("illegal_year", &self.illegal_year)?,
            till: compile("till", &self.till)?,
            range_connector: compile("range_connector", &self.range_connector)?,
            date_unit: compile("date_unit", &self.date_unit)?,
            time_unit: compile("time_unit", &self.time_unit)?,
            within_next_prefix: compile("within_next_prefix", &self.within_next_prefix)?,
            past: compile("past", &self.past)?,
            future: compile("future", &self.future)?,
            future_suffix: compile("future_suffix", &self.future_suffix)?,
            week_of: compile("week_of", &self.week_of)?,
            month_of: compile("month_of", &self.month_of)?,
            less_than: compile("less_than", &self.less_than)?,
            more_than: compile("more_than", &self.more_than)?,
            ago: compile("ago", &self.ago)?,
            later: compile("later", &self.later)?,
            year_period: compile("year_period", &self.year_period)?,
            century_suffix: compile("century_suffix", &self.century_suffix)?,
        })
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::invalid_pattern(name, e))
}

/// Compiled form of a [`PatternTable`].
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    pub simple_cases: Vec<Regex>,
    pub year: Regex,
    pub illegal_year: Regex,
    pub till: Regex,
    pub range_connector: Regex,
    pub date_unit: Regex,
    pub time_unit: Regex,
    pub within_next_prefix: Regex,
    pub past: Regex,
    pub future: Regex,
    pub future_suffix: Regex,
    pub week_of: Regex,
    pub month_of: Regex,
    pub less_than: Regex,
    pub more_than: Regex,
    pub ago: Regex,
    pub later: Regex,
    pub year_period: Regex,
    pub century_suffix: Regex,
}

/// English self-contained date-range patterns.
fn english_simple_cases() -> Vec<String> {
    [
        // "3 to 5 January 2018", "from the 3rd - 5th of may"
        r"(?i)\b(?:from\s+)?(?:the\s+)?{DAY}{ORD}\s*{TILL}\s*(?:the\s+)?{DAY}{ORD}\s+(?:of\s+)?{MONTH}(?:\s*,?\s*{YEAR})?\b",
        // "January 3 - 5, 2018", "from jan 3rd to 5th"
        r"(?i)\b(?:from\s+)?{MONTH}\.?\s+(?:the\s+)?{DAY}{ORD}\s*{TILL}\s*(?:the\s+)?{DAY}{ORD}(?:\s*,?\s*{YEAR})?\b",
        // "between 3 and 5 January"
        r"(?i)\bbetween\s+(?:the\s+)?{DAY}{ORD}\s+and\s+(?:the\s+)?{DAY}{ORD}\s+(?:of\s+)?{MONTH}(?:\s*,?\s*{YEAR})?\b",
        // "between January 3 and 5"
        r"(?i)\bbetween\s+{MONTH}\.?\s+(?:the\s+)?{DAY}{ORD}\s+and\s+(?:the\s+)?{DAY}{ORD}(?:\s*,?\s*{YEAR})?\b",
        // "next week", "this january", "month to date"
        r"(?i)(?:\b(?:(?:the\s+)?month\s+of\s+)?(?:{RELATIVE}\s+)?{MONTH_NO_MAY}\b|\b{RELATIVE}\s+may\b|\b{RELATIVE}\s+(?:weekend|week|month|year|fortnight|decade)\b|\b(?:month|year)\s+to\s+date\b)",
        // "January 2018", "may, 2019", "jan-2018"
        r"(?i)\b(?:{RELATIVE}\s+)?{MONTH}\.?(?:\s*,?\s*(?:of\s+|in\s+)?|\s*[/\-]\s*){YEAR}\b",
        // a bare year: "2018"
        r"(?i)\b{YEAR}\b",
        // "the 1990s", "'80s", "the nineties"
        r"(?i)(?:\bthe\s+)?(?:\b(?:1\d|20)\d0s|'\d0s|\b(?:twenties|thirties|forties|fifties|sixties|seventies|eighties|nineties))\b",
        // "the third quarter of 2018", "q1"
        r"(?i)\b(?:the\s+)?(?:(?:first|second|third|fourth|last|1st|2nd|3rd|4th)\s+quarter|q[1-4])(?:\s+(?:of\s+)?(?:{YEAR}|(?:this|next|last)\s+year))?\b",
        // "summer of 2019", "next winter"
        r"(?i)\b(?:(?:this|next|last|the)\s+)?(?:spring|summer|fall|autumn|winter)(?:\s+(?:of\s+)?{YEAR})?\b",
        // "the first week of march"
        r"(?i)\b(?:the\s+)?(?:first|second|third|fourth|fifth|last|1st|2nd|3rd|4th|5th)\s+week\s+(?:of|in)\s+(?:{MONTH}|(?:this|next|last)\s+month)(?:\s*,?\s*{YEAR})?\b",
        // "the second half of 2017"
        r"(?i)\b(?:the\s+)?(?:first|second|1st|2nd)\s+half\s+of\s+(?:the\s+year\s+)?(?:{YEAR}|(?:this|next|last)\s+year)\b",
        // "the rest of the week"
        r"(?i)\b(?:the\s+)?rest\s+of\s+(?:the|this|my)\s+(?:week|month|year|decade)\b",
    ]
    .into_iter()
    .map(expand)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_english_table_compiles() {
        let compiled = PatternTable::english()
            .compile()
            .expect("default table should compile");
        assert_eq!(compiled.simple_cases.len(), 13);
    }

    #[test]
    fn test_invalid_pattern_names_the_field() {
        let table = PatternTable {
            century_suffix: r"(?i)^century(".to_string(),
            ..PatternTable::english()
        };

        match table.compile() {
            Err(Error::InvalidPattern { name, .. }) => assert_eq!(name, "century_suffix"),
            other => panic!("expected invalid pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_simple_case_reports_index() {
        let mut table = PatternTable::english();
        table.simple_cases.push("[unclosed".to_string());

        match table.compile() {
            Err(Error::InvalidPattern { name, .. }) => assert_eq!(name, "simple_cases[13]"),
            other => panic!("expected invalid pattern error, got {other:?}"),
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_year_regex_exposes_year_group() {
        let compiled = PatternTable::english()
            .compile()
            .expect("default table should compile");
        let caps = compiled
            .year
            .captures("in 1999 it rained")
            .expect("year should match");
        assert_eq!(caps.name("year").map(|m| m.as_str()), Some("1999"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_within_next_prefix_flags_next() {
        let compiled = PatternTable::english()
            .compile()
            .expect("default table should compile");

        let caps = compiled
            .within_next_prefix
            .captures("within the next")
            .expect("prefix should match");
        assert_eq!(caps.name("next").map(|m| m.as_str()), Some("next"));

        let caps = compiled
            .within_next_prefix
            .captures("within")
            .expect("prefix should match");
        assert!(caps.name("next").is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_table_serialization_keeps_patterns() {
        let table = PatternTable::english();
        let json = serde_json::to_string(&table).expect("table should serialize");
        let restored: PatternTable =
            serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(restored, table);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_table_falls_back_to_english() {
        let restored: PatternTable = serde_json::from_str(r#"{"century_suffix": "^siecle\\b"}"#)
            .expect("partial table should deserialize");
        assert_eq!(restored.century_suffix, r"^siecle\b");
        assert_eq!(restored.year, PatternTable::english().year);
    }
}
