//! Collaborator extractor traits.
//!
//! The date-period engine consumes single dates, durations, ordinals and
//! cardinals from other extractors. These traits are the only contract it
//! relies on; any locale can plug in its own implementations.

use chrono::NaiveDateTime;

use crate::entity::RecognizedEntity;
use crate::pattern::PatternMatch;

/// An extractor producing entities of one kind.
///
/// Implementations must return entities sorted by start offset whose offsets
/// fit the input text and fall on `char` boundaries.
pub trait EntityExtractor: Send + Sync {
    /// Extract entities from `text`, resolving relative mentions against
    /// `reference` where the extractor cares about it.
    fn extract(&self, text: &str, reference: NaiveDateTime) -> Vec<RecognizedEntity>;
}

/// Single date-point extractor.
pub trait DatePointExtractor: EntityExtractor {
    /// Read the calendar year out of a year-pattern match.
    ///
    /// Returns `None` when the match carries no recognizable year.
    fn year_from_text(&self, year_match: &PatternMatch) -> Option<i32>;
}
