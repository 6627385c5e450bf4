//! Regex match values exchanged between the engine and its collaborators.

use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// One regex match against a subject string.
///
/// `index` and `length` are byte offsets relative to the subject the regex
/// ran on, which is not necessarily the full input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub index: usize,
    pub length: usize,
    pub value: String,
    /// Named groups that participated in the match.
    pub named_groups: BTreeMap<String, String>,
}

impl PatternMatch {
    /// Build a match from a capture set produced by `regex`.
    #[must_use]
    pub fn from_captures(regex: &Regex, caps: &Captures<'_>) -> Self {
        let whole = caps.get(0);
        let named_groups = regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();

        Self {
            index: whole.map_or(0, |m| m.start()),
            length: whole.map_or(0, |m| m.len()),
            value: whole.map_or_else(String::new, |m| m.as_str().to_string()),
            named_groups,
        }
    }

    /// Exclusive end offset within the subject.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.index + self.length
    }

    /// Text of a named group, if it participated in the match.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&str> {
        self.named_groups.get(name).map(String::as_str)
    }
}

/// Result of a backward scan for a leading connector word ("from", "between").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupResult {
    pub found: bool,
    /// Byte offset of the connector word; meaningless when `found` is false.
    pub index: usize,
}

impl LookupResult {
    #[must_use]
    pub const fn found(index: usize) -> Self {
        Self { found: true, index }
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            found: false,
            index: 0,
        }
    }

    /// The index as an option.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        if self.found { Some(self.index) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_from_captures_collects_named_groups() {
        let re = Regex::new(r"within(?:\s+the)?(?:\s+(?P<next>next))?(?P<unused>!)?")
            .expect("valid regex should compile");
        let caps = re.captures("go within the next week").expect("regex should match");
        let m = PatternMatch::from_captures(&re, &caps);

        assert_eq!(m.index, 3);
        assert_eq!(m.value, "within the next");
        assert_eq!(m.end(), 18);
        assert_eq!(m.group("next"), Some("next"));
        assert_eq!(m.group("unused"), None);
    }

    #[test]
    fn test_lookup_result() {
        assert_eq!(LookupResult::found(4).position(), Some(4));
        assert_eq!(LookupResult::not_found().position(), None);
        assert_eq!(LookupResult::default(), LookupResult::not_found());
    }
}
