//! Defines the wrapping type for a full-string matching regex.

use regex::Regex;

use std::fmt;
use std::panic::AssertUnwindSafe;

use crate::error::{MatcherError, Result};

/// A unwind-safe wrapper for `Regex` which only ever matches a complete input string.
///
/// Equality compares the underlying `&str` representations of the anchored pattern.
pub struct AnchoredRegex {
    regex: AssertUnwindSafe<Regex>,
}

impl AnchoredRegex {
    /// Compiles `pattern` wrapped in begin and end of text anchors, so it cannot match more (or
    /// less) than the whole input. The pattern is grouped first so a top level alternation is
    /// anchored as a whole.
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{})$", pattern);
        // The grouping must not repair unbalanced input such as `a)(b`.
        match Regex::new(pattern).and_then(|_| Regex::new(&anchored)) {
            Ok(regex) => Ok(AnchoredRegex {
                regex: AssertUnwindSafe(regex),
            }),
            Err(source) => Err(MatcherError::Pattern {
                pattern: anchored,
                source,
            }),
        }
    }

    /// Returns the anchored pattern backing this regex as a `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if and only if the regex matches the entire string given.
    #[inline]
    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }
}

impl fmt::Debug for AnchoredRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnchoredRegex").field(&self.as_str()).finish()
    }
}

impl PartialEq for AnchoredRegex {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for AnchoredRegex {}

impl Clone for AnchoredRegex {
    fn clone(&self) -> AnchoredRegex {
        AnchoredRegex {
            regex: AssertUnwindSafe(self.regex.0.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_partial_matches() {
        let regex = AnchoredRegex::new("[0-9]+").unwrap();
        assert_eq!(regex.as_str(), "^(?:[0-9]+)$");
        assert!(regex.is_match("123"));
        assert!(!regex.is_match("12a"));
        assert!(!regex.is_match("a123b"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let regex = AnchoredRegex::new("a|b").unwrap();
        assert!(regex.is_match("a"));
        assert!(regex.is_match("b"));
        assert!(!regex.is_match("ax"));
        assert!(!regex.is_match("xb"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        match AnchoredRegex::new("([0-9]") {
            Err(MatcherError::Pattern { pattern, .. }) => assert_eq!(pattern, "^(?:([0-9])$"),
            other => panic!("expected a pattern error, got {:?}", other),
        }
        assert!(AnchoredRegex::new("a)(b").is_err());
    }
}
