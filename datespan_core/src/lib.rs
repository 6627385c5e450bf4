#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod configuration;
pub mod entity;
pub mod error;
pub mod extractor;
pub mod pattern;
pub mod span;

pub use configuration::DatePeriodConfiguration;
pub use entity::{EntityKind, RecognizedEntity};
pub use error::{Error, Result};
pub use extractor::{DatePointExtractor, EntityExtractor};
pub use pattern::{LookupResult, PatternMatch};
pub use span::{Span, merge_spans};

/// Name reported by the date-period extractor.
pub const EXTRACTOR_NAME: &str = "daterange";

/// Smallest year accepted for year-shaped candidates.
pub const MIN_YEAR: i32 = 1500;

/// Largest year accepted for year-shaped candidates.
pub const MAX_YEAR: i32 = 2100;

pub const FOUR_DIGITS_YEAR_LENGTH: usize = 4;

/// Named group flagging "next" inside a within-prefix match.
pub const NEXT_GROUP_NAME: &str = "next";

/// Named group carrying the digits of a year match.
pub const YEAR_GROUP_NAME: &str = "year";
