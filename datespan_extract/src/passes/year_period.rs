//! Year-to-year periods ("1800-1801", "between 2010 and 2015").

use datespan_core::{DatePeriodConfiguration, Span};
use regex::Match;
use tracing::trace;

use super::{is_hyphen_embedded, year_out_of_range};

#[must_use]
pub fn match_year_period(config: &dyn DatePeriodConfiguration, text: &str) -> Vec<Span> {
    config
        .year_period_regex()
        .find_iter(text)
        .filter(|m| !m.is_empty() && !year_out_of_range(config, m.as_str()))
        .filter(|m| !has_embedded_endpoint(config, text, m))
        .map(|m| Span::new(m.start(), m.end()))
        .collect()
}

/// "a1b2-2018-2019-c3d4": an endpoint year wrapped in hyphens means the
/// period is part of an identifier.
fn has_embedded_endpoint(config: &dyn DatePeriodConfiguration, text: &str, period: &Match<'_>) -> bool {
    let embedded = config.year_regex().find_iter(period.as_str()).any(|year| {
        is_hyphen_embedded(
            config,
            text,
            period.start() + year.start(),
            period.start() + year.end(),
        )
    });
    if embedded {
        trace!("Rejected year period '{}' inside an identifier", period.as_str());
    }
    embedded
}
