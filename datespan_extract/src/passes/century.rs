//! Ordinal followed by a century word ("the 2nd century").

use datespan_core::{DatePeriodConfiguration, RecognizedEntity, Span};

use crate::boundary;

#[must_use]
pub fn match_century(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    ordinals: &[RecognizedEntity],
) -> Vec<Span> {
    ordinals
        .iter()
        .filter(|o| o.end() < text.len())
        .filter_map(|ordinal| {
            let after = &text[ordinal.end()..];
            let trimmed = after.trim_start();
            let offset = ordinal.end() + (after.len() - trimmed.len());

            boundary::first_match(config.century_suffix_regex(), trimmed.trim_end())
                .map(|suffix| Span::new(ordinal.start, offset + suffix.end()))
        })
        .collect()
}
