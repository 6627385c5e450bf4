//! Candidate passes of the date-period engine.
//!
//! Every pass is a pure function from the input (plus whatever collaborator
//! output it needs) to a list of candidate spans. The orchestrator folds the
//! lists together and flattens them.

pub mod century;
pub mod complex;
pub mod duration;
pub mod merge;
pub mod simple_cases;
pub mod single_point;
pub mod year_period;

use datespan_core::{DatePeriodConfiguration, RecognizedEntity};

use crate::boundary;

/// True when `candidate` is exactly one year whose value lies outside the
/// configured year range (or cannot be read at all).
pub(crate) fn year_out_of_range(config: &dyn DatePeriodConfiguration, candidate: &str) -> bool {
    let Some(year_match) = boundary::first_match(config.year_regex(), candidate) else {
        return false;
    };
    if year_match.length != candidate.len() {
        return false;
    }

    config
        .date_point_extractor()
        .year_from_text(&year_match)
        .is_none_or(|year| !config.year_range().contains(&year))
}

/// True when `text[start..end]` is a year wrapped in hyphens, as inside a GUID
/// or similar identifier.
pub(crate) fn is_hyphen_embedded(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    start: usize,
    end: usize,
) -> bool {
    boundary::is_infix(text, start, end)
        && boundary::char_window(text, start, end)
            .is_some_and(|window| config.illegal_year_regex().is_match(window))
}

/// Validate collaborator output against `text`.
///
/// # Panics
/// Panics when an entity does not describe a slice of `text`. Collaborators
/// must report offsets on char boundaries within the input they were given.
pub(crate) fn checked(
    text: &str,
    source: &str,
    entities: Vec<RecognizedEntity>,
) -> Vec<RecognizedEntity> {
    for entity in &entities {
        assert!(
            text.get(entity.start..entity.end()).is_some(),
            "{source} extractor reported [{}, {}) which is not a slice of the {}-byte input",
            entity.start,
            entity.end(),
            text.len()
        );
    }
    entities
}
