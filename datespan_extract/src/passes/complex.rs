//! Ranges whose ends are a mix of date points and simple-case ranges
//! ("from this week to Jan 20", "between 2017 and March 2018").

use datespan_core::{DatePeriodConfiguration, EntityKind, RecognizedEntity, Span};

use super::merge::merge_multiple_extractions;

/// Merge date points and flattened simple-case spans as range ends.
///
/// Simple-case spans lying inside a date point are dropped first, so "Feb 1st
/// 2018" does not contribute a stray "Feb" or "2018".
#[must_use]
pub fn match_complex_cases(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    date_points: &[RecognizedEntity],
    simple_spans: &[Span],
) -> Vec<Span> {
    let standalone = simple_spans
        .iter()
        .filter(|s| !date_points.iter().any(|d| d.span().contains(s)))
        .filter_map(|s| RecognizedEntity::from_span(text, *s, EntityKind::DatePeriod));

    let mut ends: Vec<RecognizedEntity> = date_points.iter().cloned().chain(standalone).collect();
    ends.sort_by_key(|e| e.start);

    merge_multiple_extractions(config, text, &ends)
}
