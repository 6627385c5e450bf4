use chrono::{Local, NaiveDateTime};
use datespan_core::{
    DatePeriodConfiguration, EXTRACTOR_NAME, EntityExtractor, EntityKind, RecognizedEntity, Span,
    merge_spans,
};
use rayon::prelude::*;
use tracing::debug;

use crate::passes::{
    checked, century, complex, duration, merge, simple_cases, single_point, year_period,
};

/// Date-period extractor driven by a locale configuration.
///
/// Runs the candidate passes over the input, flattens every candidate span
/// into a sorted disjoint list and reports each span as a
/// [`EntityKind::DatePeriod`] entity. Extraction never fails and holds no
/// mutable state, so one extractor can serve any number of threads.
#[derive(Debug, Clone)]
pub struct DatePeriodExtractor<C: DatePeriodConfiguration> {
    config: C,
}

impl<C: DatePeriodConfiguration> DatePeriodExtractor<C> {
    #[must_use]
    pub const fn new(config: C) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Name reported for produced entities.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        EXTRACTOR_NAME
    }

    /// Extract date periods from `text`, resolving relative dates against
    /// `reference`.
    ///
    /// # Panics
    /// Panics if a collaborator extractor reports an entity that is not a
    /// slice of `text`.
    #[must_use]
    pub fn extract(&self, text: &str, reference: NaiveDateTime) -> Vec<RecognizedEntity> {
        if text.is_empty() {
            return Vec::new();
        }

        let config: &dyn DatePeriodConfiguration = &self.config;

        let mut date_points = checked(
            text,
            "date point",
            config.date_point_extractor().extract(text, reference),
        );
        date_points.sort_by_key(|e| e.start);
        let mut ordinals = checked(
            text,
            "ordinal",
            config.ordinal_extractor().extract(text, reference),
        );
        ordinals.sort_by_key(|e| e.start);

        let simple = simple_cases::match_simple_cases(config, text);
        let simple_flat = merge_spans(simple.clone());

        let passes: [(&str, Vec<Span>); 7] = [
            ("simple_cases", simple),
            (
                "two_points",
                merge::merge_multiple_extractions(config, text, &date_points),
            ),
            ("duration", duration::match_duration(config, text, reference)),
            (
                "single_point",
                single_point::match_single_point(config, text, &date_points, &ordinals),
            ),
            (
                "complex",
                complex::match_complex_cases(config, text, &date_points, &simple_flat),
            ),
            ("year_period", year_period::match_year_period(config, text)),
            ("century", century::match_century(config, text, &ordinals)),
        ];

        let mut candidates = Vec::new();
        for (pass, spans) in passes {
            debug!("Pass {pass} produced {} candidate(s)", spans.len());
            candidates.extend(spans);
        }

        let results: Vec<RecognizedEntity> = merge_spans(candidates)
            .into_iter()
            .filter(|s| !s.is_empty())
            .filter_map(|s| RecognizedEntity::from_span(text, s, EntityKind::DatePeriod))
            .collect();

        debug!(
            "Extracted {} date period(s) from {} byte(s)",
            results.len(),
            text.len()
        );
        results
    }

    /// [`extract`](Self::extract) relative to the current local time.
    #[must_use]
    pub fn extract_now(&self, text: &str) -> Vec<RecognizedEntity> {
        self.extract(text, Local::now().naive_local())
    }

    /// Extract from many inputs in parallel. Results keep the input order.
    #[must_use]
    pub fn extract_batch<S>(&self, texts: &[S], reference: NaiveDateTime) -> Vec<Vec<RecognizedEntity>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref(), reference))
            .collect()
    }
}

impl<C: DatePeriodConfiguration> EntityExtractor for DatePeriodExtractor<C> {
    fn extract(&self, text: &str, reference: NaiveDateTime) -> Vec<RecognizedEntity> {
        Self::extract(self, text, reference)
    }
}
