//! English ordinal and cardinal number extractors.

use chrono::NaiveDateTime;
use datespan_core::{EntityExtractor, EntityKind, RecognizedEntity, Result};

use super::RegexTable;

const ORDINAL_PATTERNS: &[(&str, &str)] = &[
    ("numeric", r"(?i)\b\d+(?:st|nd|rd|th)\b"),
    (
        "written",
        r"(?i)\b(?:twenty-(?:first|second|third|fourth|fifth|sixth|seventh|eighth|ninth)|thirty-first|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|eleventh|twelfth|thirteenth|fourteenth|fifteenth|sixteenth|seventeenth|eighteenth|nineteenth|twentieth|thirtieth)\b",
    ),
];

// Digits directly followed by a letter ("2nd") fail the trailing \b.
const CARDINAL_PATTERNS: &[(&str, &str)] = &[
    ("numeric", r"\b\d+(?:[.,]\d+)*\b"),
    (
        "written",
        r"(?i)\b(?:zero|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|hundred|thousand)\b",
    ),
];

/// Regex-based extractor for English ordinals ("2nd", "third").
#[derive(Debug, Clone)]
pub struct EnglishOrdinalExtractor {
    table: RegexTable,
}

impl EnglishOrdinalExtractor {
    /// Compile the ordinal patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: RegexTable::new(EntityKind::Ordinal, ORDINAL_PATTERNS)?,
        })
    }
}

impl EntityExtractor for EnglishOrdinalExtractor {
    fn extract(&self, text: &str, _reference: NaiveDateTime) -> Vec<RecognizedEntity> {
        self.table.scan(text)
    }
}

/// Regex-based extractor for English cardinals ("5", "twelve").
#[derive(Debug, Clone)]
pub struct EnglishCardinalExtractor {
    table: RegexTable,
}

impl EnglishCardinalExtractor {
    /// Compile the cardinal patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: RegexTable::new(EntityKind::Cardinal, CARDINAL_PATTERNS)?,
        })
    }
}

impl EntityExtractor for EnglishCardinalExtractor {
    fn extract(&self, text: &str, _reference: NaiveDateTime) -> Vec<RecognizedEntity> {
        self.table.scan(text)
    }
}
