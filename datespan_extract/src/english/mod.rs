//! English collaborator extractors.
//!
//! Small regex tables that feed the date-period engine with single dates,
//! durations, ordinals and cardinals. Any of them can be swapped out through
//! [`DatePeriodConfiguration`](datespan_core::DatePeriodConfiguration).

pub mod date;
pub mod duration;
pub mod number;
pub mod vocabulary;

pub use date::EnglishDateExtractor;
pub use duration::EnglishDurationExtractor;
pub use number::{EnglishCardinalExtractor, EnglishOrdinalExtractor};

use datespan_core::{EntityKind, Error, RecognizedEntity, Result, Span};
use regex::Regex;

/// Ordered list of named patterns producing one entity kind.
///
/// Earlier patterns win: a later match overlapping an accepted one is dropped.
#[derive(Debug, Clone)]
pub(crate) struct RegexTable {
    kind: EntityKind,
    patterns: Vec<(&'static str, Regex)>,
}

impl RegexTable {
    /// Expand and compile `(name, template)` pairs.
    pub(crate) fn new(kind: EntityKind, defs: &[(&'static str, &str)]) -> Result<Self> {
        let patterns = defs
            .iter()
            .map(|(name, template)| {
                Regex::new(&vocabulary::expand(template))
                    .map(|re| (*name, re))
                    .map_err(|e| Error::invalid_pattern(*name, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { kind, patterns })
    }

    /// Run every pattern and return non-overlapping entities sorted by start.
    pub(crate) fn scan(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut found: Vec<RecognizedEntity> = Vec::new();

        for (name, re) in &self.patterns {
            for m in re.find_iter(text) {
                let span = Span::new(m.start(), m.end());
                if span.is_empty() || found.iter().any(|e| e.span().overlaps(&span)) {
                    continue;
                }
                if let Some(entity) = RecognizedEntity::from_span(text, span, self.kind) {
                    found.push(entity.with_metadata(serde_json::json!({ "pattern": name })));
                }
            }
        }

        found.sort_by_key(|e| e.start);
        found
    }
}
