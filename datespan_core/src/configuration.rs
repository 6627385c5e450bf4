//! Capability interface supplying everything the date-period engine needs.

use regex::Regex;
use std::ops::RangeInclusive;

use crate::extractor::{DatePointExtractor, EntityExtractor};
use crate::pattern::LookupResult;

/// Locale configuration for date-period extraction.
///
/// An implementation is built once, compiles all of its patterns up front and
/// is shared read-only by every extraction call.
pub trait DatePeriodConfiguration: Send + Sync {
    /// Single date-point extractor.
    fn date_point_extractor(&self) -> &dyn DatePointExtractor;

    /// Duration extractor ("5 days", "two weeks").
    fn duration_extractor(&self) -> &dyn EntityExtractor;

    /// Ordinal extractor ("2nd", "third").
    fn ordinal_extractor(&self) -> &dyn EntityExtractor;

    /// Cardinal extractor ("5", "twelve").
    fn cardinal_extractor(&self) -> &dyn EntityExtractor;

    /// Self-contained date-range patterns applied directly to the input.
    fn simple_cases_regexes(&self) -> &[Regex];

    fn year_regex(&self) -> &Regex;

    /// Matches a year wrapped in hyphens, as found inside identifiers.
    fn illegal_year_regex(&self) -> &Regex;

    /// "to", "till", "until", "through"...
    fn till_regex(&self) -> &Regex;

    fn date_unit_regex(&self) -> &Regex;

    fn time_unit_regex(&self) -> &Regex;

    /// "within (the next)"; must expose a `next` named group.
    fn within_next_prefix_regex(&self) -> &Regex;

    fn past_regex(&self) -> &Regex;

    fn future_regex(&self) -> &Regex;

    fn future_suffix_regex(&self) -> &Regex;

    fn week_of_regex(&self) -> &Regex;

    fn month_of_regex(&self) -> &Regex;

    fn less_than_regex(&self) -> &Regex;

    fn more_than_regex(&self) -> &Regex;

    fn ago_regex(&self) -> &Regex;

    fn later_regex(&self) -> &Regex;

    fn year_period_regex(&self) -> &Regex;

    fn century_suffix_regex(&self) -> &Regex;

    /// Whether `text` is a range connector ("and", "to", "-"...).
    fn has_connector_token(&self, text: &str) -> bool;

    /// Locate a trailing "from" in the text preceding a date.
    fn from_token_index(&self, text: &str) -> LookupResult;

    /// Locate a trailing "between" in the text preceding a date.
    fn between_token_index(&self, text: &str) -> LookupResult;

    /// Marker words of dates relative to the present ("today", "now").
    fn duration_date_restrictions(&self) -> &[String];

    /// Accepted calendar years for year-shaped candidates.
    fn year_range(&self) -> RangeInclusive<i32> {
        crate::MIN_YEAR..=crate::MAX_YEAR
    }
}
