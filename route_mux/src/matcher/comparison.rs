//! Defines `Comparison` and the helpers that build key to comparison mappings from flat
//! `key, value, key, value, ...` lists.

use std::collections::HashMap;

use log::trace;

use crate::error::{MatcherError, Result};
use crate::matcher::regex::AnchoredRegex;

/// A rule attached to a single expected value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// The actual value must equal this string exactly.
    Literal(String),
    /// The actual value must be matched in full by this pattern.
    Pattern(AnchoredRegex),
}

impl Comparison {
    /// Compiles `pattern` into a full-string `Comparison::Pattern`.
    pub fn pattern(pattern: &str) -> Result<Comparison> {
        AnchoredRegex::new(pattern).map(Comparison::Pattern)
    }

    /// Determines whether `actual` satisfies this comparison.
    pub fn is_match(&self, actual: &str) -> bool {
        match self {
            Comparison::Literal(expected) => expected == actual,
            Comparison::Pattern(regex) => regex.is_match(actual),
        }
    }
}

/// Maps a case-sensitive key to the `Comparison` its values must satisfy.
pub type Comparisons = HashMap<String, Comparison>;

/// Builds literal comparisons from a flat list of alternating keys and values.
///
/// Later duplicates of a key replace earlier ones.
///
/// ```rust
/// use route_mux::matcher::comparison::{literal_pairs, Comparison};
///
/// let map = literal_pairs(vec!["accept", "text/plain", "accept", "application/json"]).unwrap();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["accept"], Comparison::Literal("application/json".to_owned()));
///
/// assert!(literal_pairs(vec!["accept"]).is_err());
/// ```
pub fn literal_pairs<I, S>(pairs: I) -> Result<Comparisons>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    convert_pairs(pairs, |value| Ok(Comparison::Literal(value)))
}

/// Builds pattern comparisons from a flat list of alternating keys and values. Each value is
/// compiled as a pattern that must match a whole actual value.
///
/// The list length is checked before any value is compiled, so an odd list reports
/// `MatcherError::UnevenPairs` even if it also holds an invalid pattern.
pub fn pattern_pairs<I, S>(pairs: I) -> Result<Comparisons>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    convert_pairs(pairs, |value| Comparison::pattern(&value))
}

fn convert_pairs<I, S, F>(pairs: I, mut compare: F) -> Result<Comparisons>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(String) -> Result<Comparison>,
{
    let pairs: Vec<String> = pairs.into_iter().map(Into::into).collect();
    ensure_even_pairs(pairs.len())?;

    let mut map = Comparisons::with_capacity(pairs.len() / 2);
    let mut items = pairs.into_iter();
    while let (Some(key), Some(value)) = (items.next(), items.next()) {
        let comparison = compare(value)?;
        trace!(" expecting `{}` to satisfy {:?}", key, comparison);
        map.insert(key, comparison);
    }
    Ok(map)
}

fn ensure_even_pairs(len: usize) -> Result<()> {
    if len % 2 == 0 {
        Ok(())
    } else {
        Err(MatcherError::UnevenPairs { len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_builds_empty_map() {
        let none: Vec<String> = Vec::new();
        assert!(literal_pairs(none.clone()).unwrap().is_empty());
        assert!(pattern_pairs(none).unwrap().is_empty());
    }

    #[test]
    fn odd_lists_report_uneven_pairs() {
        for pairs in &[vec!["a"], vec!["a", "b", "c"]] {
            match literal_pairs(pairs.clone()) {
                Err(MatcherError::UnevenPairs { len }) => assert_eq!(len, pairs.len()),
                other => panic!("expected uneven pairs, got {:?}", other),
            }
        }

        // arity wins over a broken pattern
        match pattern_pairs(vec!["a", "(", "b"]) {
            Err(MatcherError::UnevenPairs { len: 3 }) => (),
            other => panic!("expected uneven pairs, got {:?}", other),
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        let map = literal_pairs(vec!["Key", "1", "key", "2"]).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map["Key"].is_match("1"));
        assert!(map["key"].is_match("2"));
    }

    #[test]
    fn pattern_values_are_full_match() {
        let map = pattern_pairs(vec!["x-id", "[0-9]+"]).unwrap();
        let comparison = &map["x-id"];
        assert!(comparison.is_match("123"));
        assert!(!comparison.is_match("12a"));
        assert!(!comparison.is_match("a123b"));
    }

    #[test]
    fn invalid_pattern_aborts_construction() {
        match pattern_pairs(vec!["ok", "[a-z]+", "bad", "[a-"]) {
            Err(MatcherError::Pattern { .. }) => (),
            other => panic!("expected pattern error, got {:?}", other),
        }
    }

    #[test]
    fn literal_values_are_not_patterns() {
        let map = literal_pairs(vec!["x-id", "[0-9]+"]).unwrap();
        assert!(map["x-id"].is_match("[0-9]+"));
        assert!(!map["x-id"].is_match("123"));
    }
}
