//! A single date point widened by a preceding modifier ("week of Jan 5",
//! "within 3 days from today", "less than 2 weeks ago").

use datespan_core::{DatePeriodConfiguration, NEXT_GROUP_NAME, RecognizedEntity, Span};
use regex::Regex;

use crate::boundary;

/// Widen date points, and ordinals that overlap no date point ("week of the
/// 18th"), by the modifiers that directly precede them.
#[must_use]
pub fn match_single_point(
    config: &dyn DatePeriodConfiguration,
    text: &str,
    date_points: &[RecognizedEntity],
    ordinals: &[RecognizedEntity],
) -> Vec<Span> {
    let free_ordinals = ordinals
        .iter()
        .filter(|o| !date_points.iter().any(|d| d.overlaps(o)));

    let mut spans = Vec::new();
    for candidate in date_points.iter().chain(free_ordinals) {
        let before = &text[..candidate.start];

        spans.extend(modifier_span(before, config.week_of_regex(), candidate));
        spans.extend(modifier_span(before, config.month_of_regex(), candidate));

        if !is_relative_duration_date(config, candidate) {
            continue;
        }
        spans.extend(modifier_span(before, config.less_than_regex(), candidate));
        spans.extend(modifier_span(before, config.more_than_regex(), candidate));

        // "within 3 days from yesterday" is meaningless; "within the next
        // 5 days before today" contradicts itself.
        if is_relative_to_now(config, candidate) {
            if let Some(within) = boundary::first_match(config.within_next_prefix_regex(), before) {
                let is_next = within.group(NEXT_GROUP_NAME).is_some_and(|g| !g.is_empty());
                if !(is_next && config.ago_regex().is_match(&candidate.text)) {
                    spans.extend(modifier_span(before, config.within_next_prefix_regex(), candidate));
                }
            }
        }
    }

    spans
}

/// Span from the modifier to the end of `candidate`, when the first match of
/// `regex` in `before` is also what `before` ends with.
fn modifier_span(before: &str, regex: &Regex, candidate: &RecognizedEntity) -> Option<Span> {
    let modifier = boundary::first_match(regex, before)?;
    let value = modifier.value.trim();
    if value.is_empty() || !before.trim().ends_with(value) {
        return None;
    }

    before
        .rfind(&modifier.value)
        .map(|start| Span::new(start, candidate.end()))
}

fn is_relative_duration_date(config: &dyn DatePeriodConfiguration, entity: &RecognizedEntity) -> bool {
    config.ago_regex().is_match(&entity.text) || config.later_regex().is_match(&entity.text)
}

fn is_relative_to_now(config: &dyn DatePeriodConfiguration, entity: &RecognizedEntity) -> bool {
    let text = entity.text.to_lowercase();
    config
        .duration_date_restrictions()
        .iter()
        .any(|marker| text.contains(&marker.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::checked;
    use crate::passes::testing::{config, reference, texts};

    fn widened(text: &str) -> Vec<&str> {
        let config = config();
        let date_points = checked(
            text,
            "date point",
            config.date_point_extractor().extract(text, reference()),
        );
        let ordinals = checked(
            text,
            "ordinal",
            config.ordinal_extractor().extract(text, reference()),
        );
        texts(text, match_single_point(&config, text, &date_points, &ordinals))
    }

    #[test]
    fn test_week_and_month_of() {
        assert_eq!(widened("the week of Jan 5"), vec!["the week of Jan 5"]);
        assert_eq!(widened("week of the 18th"), vec!["week of the 18th"]);
        assert_eq!(widened("the month of May 3"), vec!["month of May 3"]);
    }

    #[test]
    fn test_modifier_must_precede_directly() {
        assert!(widened("week of rest before Jan 5").is_empty());
    }

    #[test]
    fn test_less_and_more_than_relative_dates() {
        assert_eq!(
            widened("less than 2 weeks ago"),
            vec!["less than 2 weeks ago"]
        );
        assert_eq!(
            widened("more than 3 days from now"),
            vec!["more than 3 days from now"]
        );
        assert!(widened("less than Jan 5").is_empty());
    }

    #[test]
    fn test_within_relative_to_today() {
        assert_eq!(
            widened("within 3 days from today"),
            vec!["within 3 days from today"]
        );
        assert!(widened("within 3 days from tomorrow").is_empty());
    }

    #[test]
    fn test_within_next_before_today_is_suppressed() {
        assert!(widened("within the next 5 days before today").is_empty());
        assert_eq!(
            widened("within 5 days before today"),
            vec!["within 5 days before today"]
        );
    }
}
