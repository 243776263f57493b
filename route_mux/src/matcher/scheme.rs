//! Defines the `SchemeMatcher`.

use std::collections::HashSet;

use hyper::Uri;
use log::trace;

use crate::matcher::{Matcher, Rank};
use crate::state::{request_id, FromState, State};

/// A `Matcher` that succeeds when the request URL uses one of a set of schemes. Schemes are
/// compared case-insensitively. A request without a scheme, such as one in origin-form, never
/// matches.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::Uri;
/// use route_mux::matcher::{Matcher, SchemeMatcher};
/// use route_mux::state::State;
///
/// let matcher = SchemeMatcher::new(vec!["http", "HTTPS"]);
///
/// State::with_new(|state| {
///     state.put("HTTPS://example.com/".parse::<Uri>().unwrap());
///     assert!(matcher.is_match(state));
///
///     state.put("ftp://example.com/".parse::<Uri>().unwrap());
///     assert!(!matcher.is_match(state));
/// });
/// ```
#[derive(Clone, Debug)]
pub struct SchemeMatcher {
    schemes: HashSet<String>,
}

impl SchemeMatcher {
    /// Creates a new `SchemeMatcher`. An empty list is allowed and matches nothing.
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SchemeMatcher {
            schemes: schemes
                .into_iter()
                .map(|scheme| scheme.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl Matcher for SchemeMatcher {
    fn is_match(&self, state: &State) -> bool {
        let scheme = Uri::try_borrow_from(state)
            .and_then(Uri::scheme_str)
            .map(str::to_ascii_lowercase);

        match scheme {
            Some(scheme) if self.schemes.contains(&scheme) => {
                trace!(
                    "[{}] matched request scheme {} to permitted scheme",
                    request_id(state),
                    scheme
                );
                true
            }
            _ => {
                trace!(
                    "[{}] did not match request scheme {:?}",
                    request_id(state),
                    scheme
                );
                false
            }
        }
    }

    fn rank(&self) -> Rank {
        Rank::Scheme
    }
}
