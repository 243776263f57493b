//! Defines the type `MatcherFn`

use std::fmt;
use std::panic::RefUnwindSafe;

use crate::matcher::{Matcher, Rank};
use crate::state::State;

/// Wraps a caller-supplied predicate as a `Matcher`, for conditions the other matchers cannot
/// express. The predicate must be total: it answers for every request it is given.
///
/// # Examples
///
/// ```rust
/// use route_mux::hyper::{Method, Request};
/// use route_mux::matcher::{Matcher, MatcherFn, Rank};
/// use route_mux::state::State;
///
/// let matcher = MatcherFn::new(|state: &State| {
///     state.try_borrow::<Method>() == Some(&Method::GET)
/// });
///
/// let state = State::from_request(Request::get("/").body(()).unwrap());
/// assert!(matcher.is_match(&state));
///
/// let state = State::from_request(Request::post("/").body(()).unwrap());
/// assert!(!matcher.is_match(&state));
/// assert_eq!(matcher.rank(), Rank::Any);
/// ```
#[derive(Clone)]
pub struct MatcherFn<F> {
    f: F,
}

impl<F> MatcherFn<F>
where
    F: Fn(&State) -> bool + RefUnwindSafe + Send + Sync,
{
    /// Creates a new `MatcherFn`
    pub fn new(f: F) -> Self {
        MatcherFn { f }
    }
}

impl<F> Matcher for MatcherFn<F>
where
    F: Fn(&State) -> bool + RefUnwindSafe + Send + Sync,
{
    fn is_match(&self, state: &State) -> bool {
        (self.f)(state)
    }

    fn rank(&self) -> Rank {
        Rank::Any
    }
}

impl<F> fmt::Debug for MatcherFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MatcherFn")
    }
}
