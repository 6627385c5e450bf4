//! Half-open text intervals and span flattening.

use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` over an input string.
///
/// Offsets are byte offsets into the UTF-8 input and always sit on `char`
/// boundaries, so `&text[span.start..span.end]` never panics for a span
/// produced against `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. `end` is clamped so that `start <= end` always holds.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when the two spans share at least one position.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when the spans overlap or are directly adjacent.
    #[must_use]
    pub const fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when `other` lies entirely inside `self`.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest span covering both inputs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Slice the covered text out of `text`.
    ///
    /// Returns `None` if the span does not fit `text`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// Flatten candidate spans into a sorted, pairwise-disjoint list.
///
/// Spans are ordered by start offset and every run of touching or overlapping
/// spans collapses into its union. Running this on its own output is a no-op.
#[must_use]
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.touches(&span) => *last = last.union(&span),
            _ => merged.push(span),
        }
    }
    merged
}
