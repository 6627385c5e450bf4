//! English duration extractor.

use chrono::NaiveDateTime;
use datespan_core::{EntityExtractor, EntityKind, RecognizedEntity, Result};

use super::RegexTable;

const DURATION_PATTERNS: &[(&str, &str)] = &[
    (
        "counted",
        r"(?i)\b{NUM}\s+(?:business\s+)?(?:decades?|years?|months?|weeks?|fortnights?|days?|hours?|hrs?|minutes?|mins?|seconds?|secs?)\b",
    ),
    // "2 upcoming days": the count sits in front of the modifier
    ("bare_unit", r"(?i)\b(?:decades|years|months|weeks|fortnights|days)\b"),
];

/// Regex-based extractor for English durations.
#[derive(Debug, Clone)]
pub struct EnglishDurationExtractor {
    table: RegexTable,
}

impl EnglishDurationExtractor {
    /// Compile the duration patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: RegexTable::new(EntityKind::Duration, DURATION_PATTERNS)?,
        })
    }
}

impl EntityExtractor for EnglishDurationExtractor {
    fn extract(&self, text: &str, _reference: NaiveDateTime) -> Vec<RecognizedEntity> {
        self.table.scan(text)
    }
}
