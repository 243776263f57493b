//! Defines the path matchers: `PathMatcher`, `PathWithVarsMatcher` and `PathRegexMatcher`.
//!
//! All of them compare against `Uri::path`, which excludes the query string.

use hyper::Uri;
use log::trace;

use crate::error::Result;
use crate::matcher::regex::AnchoredRegex;
use crate::matcher::{Matcher, Rank};
use crate::state::{request_id, FromState, State};

const NUMBER_PLACEHOLDER: &str = ":number";
const NUMBER_FRAGMENT: &str = "([0-9]{1,})";
const STRING_PLACEHOLDER: &str = ":string";
const STRING_FRAGMENT: &str = "([a-zA-Z]{1,})";

fn request_path(state: &State) -> Option<&str> {
    Uri::try_borrow_from(state).map(Uri::path)
}

fn log_outcome(state: &State, matched: bool, expected: &str) -> bool {
    if matched {
        trace!("[{}] matched request path to `{}`", request_id(state), expected);
    } else {
        trace!("[{}] did not match request path to `{}`", request_id(state), expected);
    }
    matched
}

/// A `Matcher` that succeeds when the request path is exactly the given string, byte for byte.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::Uri;
/// use route_mux::matcher::{Matcher, PathMatcher};
/// use route_mux::state::State;
///
/// let matcher = PathMatcher::new("/a/b");
///
/// State::with_new(|state| {
///     state.put(Uri::from_static("/a/b?x=1"));
///     assert!(matcher.is_match(state));
///
///     state.put(Uri::from_static("/a/b/"));
///     assert!(!matcher.is_match(state));
/// });
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMatcher {
    path: String,
}

impl PathMatcher {
    /// Creates a new `PathMatcher`
    pub fn new<S>(path: S) -> Self
    where
        S: Into<String>,
    {
        PathMatcher { path: path.into() }
    }

    /// Determines if `path` is exactly the expected path.
    pub fn matches_path(&self, path: &str) -> bool {
        self.path == path
    }
}

impl Matcher for PathMatcher {
    fn is_match(&self, state: &State) -> bool {
        let matched = request_path(state).map_or(false, |path| self.matches_path(path));
        log_outcome(state, matched, &self.path)
    }

    fn rank(&self) -> Rank {
        Rank::Path
    }
}

/// A `Matcher` that succeeds when the request path fits a template holding typed placeholders.
///
/// `:number` stands for one or more ASCII digits and `:string` for one or more ASCII letters.
/// The rest of the template is taken as a pattern, and the whole path must match.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::Uri;
/// use route_mux::matcher::{Matcher, PathWithVarsMatcher};
/// use route_mux::state::State;
///
/// let matcher = PathWithVarsMatcher::new("/users/:number/:string").unwrap();
///
/// State::with_new(|state| {
///     state.put(Uri::from_static("/users/42/posts"));
///     assert!(matcher.is_match(state));
///
///     state.put(Uri::from_static("/users/posts/42"));
///     assert!(!matcher.is_match(state));
/// });
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathWithVarsMatcher {
    regex: AnchoredRegex,
}

impl PathWithVarsMatcher {
    /// Creates a new `PathWithVarsMatcher`, failing if the expanded template is not a valid
    /// pattern.
    pub fn new(template: &str) -> Result<Self> {
        let regex = AnchoredRegex::new(&Self::expand(template))?;
        trace!(" compiled path template `{}` as `{}`", template, regex.as_str());
        Ok(PathWithVarsMatcher { regex })
    }

    /// Replaces every placeholder in `template` with its pattern fragment, repeating until none
    /// remain.
    ///
    /// ```rust
    /// use route_mux::matcher::PathWithVarsMatcher;
    ///
    /// assert_eq!(
    ///     PathWithVarsMatcher::expand(":number-:number/:string"),
    ///     "([0-9]{1,})-([0-9]{1,})/([a-zA-Z]{1,})"
    /// );
    /// ```
    pub fn expand(template: &str) -> String {
        let mut path = template.to_owned();
        loop {
            if path.contains(NUMBER_PLACEHOLDER) {
                path = path.replace(NUMBER_PLACEHOLDER, NUMBER_FRAGMENT);
            } else if path.contains(STRING_PLACEHOLDER) {
                path = path.replace(STRING_PLACEHOLDER, STRING_FRAGMENT);
            } else {
                break path;
            }
        }
    }

    /// Determines if `path` fits the template in full.
    pub fn matches_path(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns the anchored pattern the template expanded to.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for PathWithVarsMatcher {
    fn is_match(&self, state: &State) -> bool {
        let matched = request_path(state).map_or(false, |path| self.matches_path(path));
        log_outcome(state, matched, self.regex.as_str())
    }

    fn rank(&self) -> Rank {
        Rank::Path
    }
}

/// A `Matcher` that succeeds when the request path is matched in full by a pattern.
///
/// Any `#` characters are removed from the pattern before it is compiled.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::Uri;
/// use route_mux::matcher::{Matcher, PathRegexMatcher};
/// use route_mux::state::State;
///
/// let matcher = PathRegexMatcher::new("#/static/[a-z]+\\.css#").unwrap();
///
/// State::with_new(|state| {
///     state.put(Uri::from_static("/static/site.css"));
///     assert!(matcher.is_match(state));
///
///     state.put(Uri::from_static("/static/site.css.map"));
///     assert!(!matcher.is_match(state));
/// });
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRegexMatcher {
    regex: AnchoredRegex,
}

impl PathRegexMatcher {
    /// Creates a new `PathRegexMatcher`, failing if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = AnchoredRegex::new(&pattern.replace('#', ""))?;
        trace!(" compiled path pattern `{}` as `{}`", pattern, regex.as_str());
        Ok(PathRegexMatcher { regex })
    }

    /// Determines if `path` is matched in full by the pattern.
    pub fn matches_path(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns the anchored pattern this matcher compiled.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for PathRegexMatcher {
    fn is_match(&self, state: &State) -> bool {
        let matched = request_path(state).map_or(false, |path| self.matches_path(path));
        log_outcome(state, matched, self.regex.as_str())
    }

    fn rank(&self) -> Rank {
        Rank::Path
    }
}
