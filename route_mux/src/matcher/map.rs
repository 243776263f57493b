//! The predicate deciding whether a multi-valued map satisfies a set of `Comparisons`.

use std::collections::HashMap;
use std::str;

use hyper::HeaderMap;

use crate::matcher::comparison::Comparisons;

/// A mapping where each key may hold several ordered values, such as repeated request headers.
pub trait MultiValueMap {
    /// Calls `f` with each value stored under `key`, stopping at the first one for which it
    /// returns `true`.
    ///
    /// Returns `None` when `key` is absent, otherwise whether any value satisfied `f`.
    fn find_value(&self, key: &str, f: &mut dyn FnMut(&str) -> bool) -> Option<bool>;
}

/// Header names are looked up case-insensitively. A key that is not a valid header name is
/// treated as absent, and values that are not valid UTF-8 never satisfy a comparison.
impl MultiValueMap for HeaderMap {
    fn find_value(&self, key: &str, f: &mut dyn FnMut(&str) -> bool) -> Option<bool> {
        let mut values = self.get_all(key).iter().peekable();
        values.peek()?;
        Some(
            values
                .filter_map(|value| str::from_utf8(value.as_bytes()).ok())
                .any(|value| f(value)),
        )
    }
}

impl MultiValueMap for HashMap<String, Vec<String>> {
    fn find_value(&self, key: &str, f: &mut dyn FnMut(&str) -> bool) -> Option<bool> {
        self.get(key)
            .map(|values| values.iter().any(|value| f(value.as_str())))
    }
}

/// Determines whether `actual` satisfies `expected`.
///
/// A key is satisfied when any of its actual values satisfies its `Comparison`. With
/// `require_all` every expected key must be satisfied, and a key missing from `actual` fails the
/// predicate at once. Without it, one satisfied key is enough.
///
/// An empty `expected` mapping is satisfied by every map in both modes.
///
/// ```rust
/// use route_mux::hyper::HeaderMap;
/// use route_mux::matcher::comparison::literal_pairs;
/// use route_mux::matcher::map::match_map;
///
/// let expected = literal_pairs(vec!["accept", "application/json"]).unwrap();
///
/// let mut headers = HeaderMap::new();
/// headers.append("accept", "text/plain".parse().unwrap());
/// assert!(!match_map(&expected, &headers, true));
///
/// headers.append("accept", "application/json".parse().unwrap());
/// assert!(match_map(&expected, &headers, true));
/// ```
pub fn match_map<M>(expected: &Comparisons, actual: &M, require_all: bool) -> bool
where
    M: MultiValueMap + ?Sized,
{
    for (key, comparison) in expected {
        let satisfied = actual
            .find_value(key, &mut |value| comparison.is_match(value))
            .unwrap_or(false);

        match (satisfied, require_all) {
            (false, true) => return false,
            (true, false) => return true,
            _ => (),
        }
    }

    require_all || expected.is_empty()
}
