//! Recognized entity types shared by all extractors.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// The kind of entity an extractor reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EntityKind {
    /// A single calendar date: "Jan 5", "tomorrow", "3 days ago"
    Date = 0,
    /// An amount of time: "5 days", "two weeks"
    Duration = 1,
    /// An ordinal number: "2nd", "third"
    Ordinal = 2,
    /// A cardinal number: "5", "twelve"
    Cardinal = 3,
    /// A range of calendar dates: "from Jan 1 to Jan 5"
    DatePeriod = 4,
}

impl EntityKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Date => "date",
            Self::Duration => "duration",
            Self::Ordinal => "ordinal",
            Self::Cardinal => "cardinal",
            Self::DatePeriod => crate::EXTRACTOR_NAME,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected mention of some entity kind inside an input text.
///
/// `text` is always `input[start..start + length]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    /// Byte offset of the first character.
    pub start: usize,

    /// Length in bytes.
    pub length: usize,

    /// The covered text.
    pub text: String,

    /// What was recognized.
    pub kind: EntityKind,

    /// Extractor-specific details (matched pattern name, parsed values...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl RecognizedEntity {
    /// Build an entity for `span` over `input`.
    ///
    /// Returns `None` if the span does not fit the input.
    #[must_use]
    pub fn from_span(input: &str, span: Span, kind: EntityKind) -> Option<Self> {
        let text = span.slice(input)?;
        Some(Self {
            start: span.start,
            length: span.len(),
            text: text.to_string(),
            kind,
            metadata: None,
        })
    }

    /// Attach metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }

    /// True when the two entities share at least one position.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.span().overlaps(&other.span())
    }
}
