//! Merge consecutive date mentions joined by a till word or connector.

use datespan_core::{DatePeriodConfiguration, RecognizedEntity, Span};
use tracing::trace;

use crate::boundary;

/// Scan consecutive pairs of `entities` (sorted by start) and emit a span
/// for every pair that forms a range.
///
/// "Jan 1 to Jan 5" and "from Jan 1 until Jan 5" merge on the till word; a
/// plain connector ("and", "-") only merges when the pair is introduced by
/// "between". A merged pair is consumed whole.
#[must_use]
pub fn merge_multiple_extractions(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    entities: &[RecognizedEntity],
) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut idx = 0;

    while idx + 1 < entities.len() {
        let this = &entities[idx];
        let next = &entities[idx + 1];

        if this.end() >= next.start {
            idx += 1;
            continue;
        }

        let middle = text[this.end()..next.start].trim().to_lowercase();
        // ASCII lowercasing keeps byte offsets valid for the lookups.
        let before = text[..this.start].to_ascii_lowercase();

        if boundary::covers(config.till_regex(), &middle) {
            let start = config
                .from_token_index(&before)
                .position()
                .or_else(|| config.between_token_index(&before).position())
                .unwrap_or(this.start);

            trace!("Merged '{}' and '{}' on till word", this.text, next.text);
            spans.push(Span::new(start, next.end()));
            idx += 2;
            continue;
        }

        if config.has_connector_token(&middle) {
            if let Some(start) = config.between_token_index(&before).position() {
                trace!("Merged '{}' and '{}' on connector", this.text, next.text);
                spans.push(Span::new(start, next.end()));
                idx += 2;
                continue;
            }
        }

        idx += 1;
    }

    spans
}
