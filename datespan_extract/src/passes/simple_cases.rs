//! Self-contained date-range patterns.

use datespan_core::{DatePeriodConfiguration, FOUR_DIGITS_YEAR_LENGTH, Span};
use tracing::trace;

use super::{is_hyphen_embedded, year_out_of_range};

/// Match every simple-case pattern against `text`.
///
/// Bare years outside the year range are dropped, as are four-digit years
/// wrapped in hyphens (identifiers such as GUIDs).
#[must_use]
pub fn match_simple_cases(config: &dyn DatePeriodConfiguration, text: &str) -> Vec<Span> {
    let mut spans = Vec::new();

    for regex in config.simple_cases_regexes() {
        for m in regex.find_iter(text) {
            if m.is_empty() {
                continue;
            }
            if year_out_of_range(config, m.as_str()) {
                trace!("Rejected out-of-range year '{}'", m.as_str());
                continue;
            }
            if is_embedded_year(config, text, m.start(), m.end()) {
                trace!("Rejected hyphen-embedded year at {}", m.start());
                continue;
            }
            spans.push(Span::new(m.start(), m.end()));
        }
    }

    spans
}

fn is_embedded_year(config: &dyn DatePeriodConfiguration, text: &str, start: usize, end: usize) -> bool {
    end - start == FOUR_DIGITS_YEAR_LENGTH
        && config.year_regex().is_match(&text[start..end])
        && is_hyphen_embedded(config, text, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::testing::{config, texts};

    fn simple(text: &str) -> Vec<&str> {
        texts(text, match_simple_cases(&config(), text))
    }

    #[test]
    fn test_month_and_relative_periods() {
        assert_eq!(simple("see you next week"), vec!["next week"]);
        assert_eq!(simple("back in January 2018"), vec!["January 2018"]);
        assert_eq!(simple("during the 1990s"), vec!["the 1990s"]);
    }

    #[test]
    fn test_day_range_within_month() {
        assert_eq!(simple("from 3 to 5 January"), vec!["from 3 to 5 January"]);
    }

    #[test]
    fn test_year_guard() {
        assert_eq!(simple("in 1999"), vec!["1999"]);
        assert!(simple("page 1234").is_empty());
    }

    #[test]
    fn test_hyphen_embedded_year_is_ignored() {
        assert!(simple("id 3f2a-1999-bc10").is_empty());
        assert_eq!(simple("1999-"), vec!["1999"]);
    }
}
