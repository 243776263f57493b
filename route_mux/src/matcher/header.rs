//! Defines the `HeaderMatcher` and `HeaderRegexMatcher`.

use hyper::HeaderMap;
use log::trace;

use crate::error::Result;
use crate::matcher::comparison::{literal_pairs, pattern_pairs, Comparisons};
use crate::matcher::map::match_map;
use crate::matcher::{Matcher, Rank};
use crate::state::{request_id, FromState, State};

/// A `Matcher` that succeeds when, for every expected header, the request carries at least one
/// value equal to the expected value.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::HeaderMap;
/// use route_mux::matcher::{HeaderMatcher, Matcher};
/// use route_mux::state::State;
///
/// let matcher = HeaderMatcher::new(vec!["x-api-version", "2"]).unwrap();
///
/// State::with_new(|state| {
///     let mut headers = HeaderMap::new();
///     headers.append("x-api-version", "1".parse().unwrap());
///     state.put(headers);
///     assert!(!matcher.is_match(state));
///
///     let mut headers = HeaderMap::new();
///     headers.append("x-api-version", "1".parse().unwrap());
///     headers.append("x-api-version", "2".parse().unwrap());
///     state.put(headers);
///     assert!(matcher.is_match(state));
/// });
///
/// assert!(HeaderMatcher::new(vec!["x-api-version"]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HeaderMatcher {
    headers: Comparisons,
}

impl HeaderMatcher {
    /// Creates a new `HeaderMatcher` from a flat list of alternating header names and values.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(HeaderMatcher {
            headers: literal_pairs(pairs)?,
        })
    }
}

impl Matcher for HeaderMatcher {
    fn is_match(&self, state: &State) -> bool {
        match_headers(&self.headers, state)
    }

    fn rank(&self) -> Rank {
        Rank::Any
    }
}

/// A `Matcher` that succeeds when, for every expected header, the request carries at least one
/// value matched in full by the expected pattern.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::HeaderMap;
/// use route_mux::matcher::{HeaderRegexMatcher, Matcher};
/// use route_mux::state::State;
///
/// let matcher = HeaderRegexMatcher::new(vec!["x-tenant", "[0-9]+"]).unwrap();
///
/// State::with_new(|state| {
///     let mut headers = HeaderMap::new();
///     headers.insert("x-tenant", "123".parse().unwrap());
///     state.put(headers);
///     assert!(matcher.is_match(state));
///
///     let mut headers = HeaderMap::new();
///     headers.insert("x-tenant", "a123b".parse().unwrap());
///     state.put(headers);
///     assert!(!matcher.is_match(state));
/// });
/// ```
#[derive(Clone, Debug)]
pub struct HeaderRegexMatcher {
    headers: Comparisons,
}

impl HeaderRegexMatcher {
    /// Creates a new `HeaderRegexMatcher` from a flat list of alternating header names and
    /// patterns.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(HeaderRegexMatcher {
            headers: pattern_pairs(pairs)?,
        })
    }
}

impl Matcher for HeaderRegexMatcher {
    fn is_match(&self, state: &State) -> bool {
        match_headers(&self.headers, state)
    }

    fn rank(&self) -> Rank {
        Rank::Any
    }
}

fn match_headers(expected: &Comparisons, state: &State) -> bool {
    if expected.is_empty() {
        return true;
    }

    let matched = match HeaderMap::try_borrow_from(state) {
        Some(headers) => match_map(expected, headers, true),
        None => false,
    };

    if matched {
        trace!("[{}] matched request headers", request_id(state));
    } else {
        trace!(
            "[{}] did not match request headers against {} expected",
            request_id(state),
            expected.len()
        );
    }
    matched
}
