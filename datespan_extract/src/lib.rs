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

//! Date-period extraction over free English text.
//!
//! [`DatePeriodExtractor`] finds spans such as "from Jan 1 to Jan 5", "the
//! next 3 weeks" or "the 2nd century". Locale knowledge lives behind
//! [`DatePeriodConfiguration`](datespan_core::DatePeriodConfiguration);
//! [`EnglishDatePeriodConfiguration`] is the bundled implementation.

pub mod boundary;
pub mod configuration;
pub mod english;
pub mod extractor;
pub mod passes;
pub mod patterns;

pub use configuration::{EnglishDatePeriodConfiguration, ExtractorSettings};
pub use extractor::DatePeriodExtractor;
pub use patterns::{CompiledPatterns, PatternTable};

/// English extractor with the default pattern table and settings.
///
/// # Errors
/// Returns an error if a default pattern fails to compile.
pub fn english() -> datespan_core::Result<DatePeriodExtractor<EnglishDatePeriodConfiguration>> {
    EnglishDatePeriodConfiguration::with_defaults().map(DatePeriodExtractor::new)
}
