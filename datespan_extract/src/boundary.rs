//! Anchored matching helpers.
//!
//! The passes need "a match that ends the preceding text" and "a match that
//! starts the following text". These are expressed as plain scans plus
//! trim-and-compare checks so that no lookbehind support is required from the
//! regex engine.

use datespan_core::{LookupResult, PatternMatch};
use regex::Regex;

/// Every non-overlapping match of `regex` in `text`.
#[must_use]
pub fn matches(regex: &Regex, text: &str) -> Vec<PatternMatch> {
    regex
        .captures_iter(text)
        .map(|caps| PatternMatch::from_captures(regex, &caps))
        .collect()
}

/// Leftmost match of `regex` in `text`.
#[must_use]
pub fn first_match(regex: &Regex, text: &str) -> Option<PatternMatch> {
    regex
        .captures(text)
        .map(|caps| PatternMatch::from_captures(regex, &caps))
}

/// The last match followed only by whitespace.
#[must_use]
pub fn match_end(regex: &Regex, text: &str) -> Option<PatternMatch> {
    matches(regex, text)
        .into_iter()
        .rfind(|m| text[m.end()..].trim().is_empty())
}

/// The first match preceded only by whitespace.
#[must_use]
pub fn match_begin(regex: &Regex, text: &str) -> Option<PatternMatch> {
    matches(regex, text)
        .into_iter()
        .find(|m| text[..m.index].trim().is_empty())
}

/// True when the leftmost match of `regex` spans all of `text`.
#[must_use]
pub fn covers(regex: &Regex, text: &str) -> bool {
    regex
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

/// True when `[start, end)` touches neither end of `text`.
#[must_use]
pub const fn is_infix(text: &str, start: usize, end: usize) -> bool {
    start > 0 && end < text.len()
}

/// `text[start..end]` widened by one whole character on each side.
///
/// Returns `None` when there is no character before `start` or after `end`.
#[must_use]
pub fn char_window(text: &str, start: usize, end: usize) -> Option<&str> {
    let before = text.get(..start)?.chars().next_back()?;
    let after = text.get(end..)?.chars().next()?;
    text.get(start - before.len_utf8()..end + after.len_utf8())
}

/// Locate `token` as the final whole word of `text` (ignoring trailing
/// whitespace and ASCII case).
#[must_use]
pub fn trailing_token_index(text: &str, token: &str) -> LookupResult {
    let trimmed = text.trim_end();
    let Some(index) = trimmed.len().checked_sub(token.len()) else {
        return LookupResult::not_found();
    };

    let is_token = trimmed
        .get(index..)
        .is_some_and(|tail| tail.eq_ignore_ascii_case(token));
    if !is_token {
        return LookupResult::not_found();
    }

    let at_word_start = trimmed[..index]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());

    if at_word_start {
        LookupResult::found(index)
    } else {
        LookupResult::not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).expect("valid regex should compile")
    }

    #[test]
    fn test_match_end_requires_blank_suffix() {
        let past = re(r"(?i)\b(?:last|past)\b");

        let m = match_end(&past, "in the past  ");
        assert_eq!(m.map(|m| m.index), Some(7));

        assert!(match_end(&past, "the past year").is_none());
    }

    #[test]
    fn test_match_end_picks_last_candidate() {
        let past = re(r"(?i)\b(?:last|past)\b");
        let m = match_end(&past, "last week and the past ");
        assert_eq!(m.map(|m| m.value), Some("past".to_string()));
    }

    #[test]
    fn test_match_begin_requires_blank_prefix() {
        let suffix = re(r"(?i)\b(?:in\s+the\s+)?(?:future|hence)\b");

        let m = match_begin(&suffix, " hence, maybe");
        assert_eq!(m.map(|m| m.end()), Some(6));

        assert!(match_begin(&suffix, " or hence").is_none());
    }

    #[test]
    fn test_covers() {
        let till = re(r"(?i)\b(?:to|until)\b|-");
        assert!(covers(&till, "to"));
        assert!(covers(&till, "-"));
        assert!(!covers(&till, "up to"));
        assert!(!covers(&till, "to the"));
        assert!(!covers(&till, ""));
    }

    #[test]
    fn test_is_infix() {
        assert!(is_infix("a-2018-b", 2, 6));
        assert!(!is_infix("2018-b", 0, 4));
        assert!(!is_infix("a-2018", 2, 6));
    }

    #[test]
    fn test_char_window() {
        assert_eq!(char_window("ab-2018-cd", 3, 7), Some("-2018-"));
        assert_eq!(char_window("é2018ü", 2, 6), Some("é2018ü"));
        assert_eq!(char_window("2018-", 0, 4), None);
        assert_eq!(char_window("-2018", 1, 5), None);
    }

    #[test]
    fn test_trailing_token_index() {
        assert_eq!(trailing_token_index("leave from", "from"), LookupResult::found(6));
        assert_eq!(trailing_token_index("FROM  ", "from"), LookupResult::found(0));
        assert_eq!(trailing_token_index("therefrom", "from").position(), None);
        assert_eq!(trailing_token_index("from here", "from").position(), None);
        assert_eq!(trailing_token_index("", "between").position(), None);
    }
}
