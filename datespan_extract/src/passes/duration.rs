//! Ranges built around a duration ("within the next 5 days", "past 3 weeks",
//! "2 weeks hence").

use chrono::NaiveDateTime;
use datespan_core::{DatePeriodConfiguration, RecognizedEntity, Span};

use super::checked;
use crate::boundary;

/// Turn date-unit durations with a range modifier into spans.
///
/// At most one span is produced per duration; the first rule that applies
/// wins: a within prefix, then a past/future prefix, then a past/future
/// suffix.
#[must_use]
pub fn match_duration(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    reference: NaiveDateTime,
) -> Vec<Span> {
    let durations = checked(
        text,
        "duration",
        config.duration_extractor().extract(text, reference),
    );

    durations
        .iter()
        .filter(|d| config.date_unit_regex().is_match(&d.text))
        .filter_map(|d| duration_span(config, text, d, reference))
        .collect()
}

fn duration_span(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    duration: &RecognizedEntity,
    reference: NaiveDateTime,
) -> Option<Span> {
    let before = text[..duration.start].to_ascii_lowercase();
    let after = text[duration.end()..].to_ascii_lowercase();

    if before.trim().is_empty() && after.trim().is_empty() {
        return None;
    }

    // Only day-or-longer units form a date range; hours and minutes belong
    // to time ranges.
    if let Some(prefix) = boundary::match_end(config.within_next_prefix_regex(), &before) {
        if config.date_unit_regex().is_match(&duration.text)
            && !config.time_unit_regex().is_match(&duration.text)
        {
            return Some(Span::new(prefix.index, duration.end()));
        }
    }

    let modifier = boundary::match_end(config.past_regex(), &before)
        .or_else(|| boundary::match_end(config.future_regex(), &before));
    if let Some(modifier) = modifier {
        return prefixed_span(config, &before, modifier.index, duration, reference);
    }

    [
        config.past_regex(),
        config.future_regex(),
        config.future_suffix_regex(),
    ]
    .into_iter()
    .find_map(|regex| boundary::match_begin(regex, &after))
    .map(|suffix| Span::new(duration.start, duration.end() + suffix.end()))
}

/// "next 5 days" spans from the modifier; "2 upcoming days" from the number
/// in front of it. "2 upcoming 3 days" keeps only "upcoming 3 days".
fn prefixed_span(
    config: &dyn DatePeriodConfiguration,
    before: &str,
    modifier_index: usize,
    duration: &RecognizedEntity,
    reference: NaiveDateTime,
) -> Option<Span> {
    let prefix = before[..modifier_index].trim_end();
    let cardinals = config.cardinal_extractor();
    let prefix_numbers = checked(prefix, "cardinal", cardinals.extract(prefix, reference));
    let duration_has_number = !cardinals.extract(&duration.text, reference).is_empty();

    if prefix_numbers.is_empty() || duration_has_number {
        return Some(Span::new(modifier_index, duration.end()));
    }

    prefix_numbers
        .iter()
        .max_by_key(|n| n.end())
        .filter(|n| n.end() == prefix.len())
        .map(|n| Span::new(n.start, duration.end()))
}
