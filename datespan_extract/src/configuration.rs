//! English date-period configuration.

use datespan_core::{
    DatePeriodConfiguration, DatePointExtractor, EntityExtractor, Error, LookupResult,
    MAX_YEAR, MIN_YEAR, Result,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::boundary;
use crate::english::{
    EnglishCardinalExtractor, EnglishDateExtractor, EnglishDurationExtractor,
    EnglishOrdinalExtractor,
};
use crate::patterns::{CompiledPatterns, PatternTable};

/// Tunables that are not patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Smallest accepted year for year-shaped candidates.
    pub min_year: i32,
    /// Largest accepted year for year-shaped candidates.
    pub max_year: i32,
    /// Words marking a date as relative to the present ("3 days from today").
    pub relative_markers: Vec<String>,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
            relative_markers: vec!["today".to_string(), "now".to_string()],
        }
    }
}

impl ExtractorSettings {
    /// Check the settings for consistency.
    ///
    /// # Errors
    /// Returns [`Error::InvalidYearRange`] when `min_year > max_year`.
    pub const fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::InvalidYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }
}

/// Date-period configuration backed by the English collaborators.
#[derive(Debug, Clone)]
pub struct EnglishDatePeriodConfiguration {
    patterns: CompiledPatterns,
    settings: ExtractorSettings,
    dates: EnglishDateExtractor,
    durations: EnglishDurationExtractor,
    ordinals: EnglishOrdinalExtractor,
    cardinals: EnglishCardinalExtractor,
}

impl EnglishDatePeriodConfiguration {
    /// Compile `table` and build the English collaborators.
    ///
    /// # Errors
    /// Returns an error if any pattern fails to compile or the settings are
    /// inconsistent.
    pub fn new(table: &PatternTable, settings: ExtractorSettings) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            patterns: table.compile()?,
            settings,
            dates: EnglishDateExtractor::new()?,
            durations: EnglishDurationExtractor::new()?,
            ordinals: EnglishOrdinalExtractor::new()?,
            cardinals: EnglishCardinalExtractor::new()?,
        })
    }

    /// Configuration with the default English table and settings.
    ///
    /// # Errors
    /// Returns an error if default pattern compilation fails.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&PatternTable::english(), ExtractorSettings::default())
    }

    #[must_use]
    pub const fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }
}

impl DatePeriodConfiguration for EnglishDatePeriodConfiguration {
    fn date_point_extractor(&self) -> &dyn DatePointExtractor {
        &self.dates
    }

    fn duration_extractor(&self) -> &dyn EntityExtractor {
        &self.durations
    }

    fn ordinal_extractor(&self) -> &dyn EntityExtractor {
        &self.ordinals
    }

    fn cardinal_extractor(&self) -> &dyn EntityExtractor {
        &self.cardinals
    }

    fn simple_cases_regexes(&self) -> &[Regex] {
        &self.patterns.simple_cases
    }

    fn year_regex(&self) -> &Regex {
        &self.patterns.year
    }

    fn illegal_year_regex(&self) -> &Regex {
        &self.patterns.illegal_year
    }

    fn till_regex(&self) -> &Regex {
        &self.patterns.till
    }

    fn date_unit_regex(&self) -> &Regex {
        &self.patterns.date_unit
    }

    fn time_unit_regex(&self) -> &Regex {
        &self.patterns.time_unit
    }

    fn within_next_prefix_regex(&self) -> &Regex {
        &self.patterns.within_next_prefix
    }

    fn past_regex(&self) -> &Regex {
        &self.patterns.past
    }

    fn future_regex(&self) -> &Regex {
        &self.patterns.future
    }

    fn future_suffix_regex(&self) -> &Regex {
        &self.patterns.future_suffix
    }

    fn week_of_regex(&self) -> &Regex {
        &self.patterns.week_of
    }

    fn month_of_regex(&self) -> &Regex {
        &self.patterns.month_of
    }

    fn less_than_regex(&self) -> &Regex {
        &self.patterns.less_than
    }

    fn more_than_regex(&self) -> &Regex {
        &self.patterns.more_than
    }

    fn ago_regex(&self) -> &Regex {
        &self.patterns.ago
    }

    fn later_regex(&self) -> &Regex {
        &self.patterns.later
    }

    fn year_period_regex(&self) -> &Regex {
        &self.patterns.year_period
    }

    fn century_suffix_regex(&self) -> &Regex {
        &self.patterns.century_suffix
    }

    fn has_connector_token(&self, text: &str) -> bool {
        boundary::covers(&self.patterns.range_connector, text.trim())
    }

    fn from_token_index(&self, text: &str) -> LookupResult {
        boundary::trailing_token_index(text, "from")
    }

    fn between_token_index(&self, text: &str) -> LookupResult {
        boundary::trailing_token_index(text, "between")
    }

    fn duration_date_restrictions(&self) -> &[String] {
        &self.settings.relative_markers
    }

    fn year_range(&self) -> RangeInclusive<i32> {
        self.settings.min_year..=self.settings.max_year
    }
}
