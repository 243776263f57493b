//! Defines the `Matchers` collection and its ordering by `Rank`.

use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

use log::trace;

use crate::matcher::{Matcher, Rank};
use crate::state::{request_id, State};

/// An ordered sequence of matchers.
///
/// [`Matchers::sort`] orders the sequence ascending by [`Rank`] with a stable sort: matchers of
/// equal rank keep their relative order. Sorting takes `&mut self`, so a collection cannot be
/// sorted while anything else reads it.
///
/// # Examples
///
/// ```rust
/// use route_mux::matcher::{HeaderMatcher, PathMatcher, SchemeMatcher};
/// use route_mux::{Matchers, Rank};
///
/// let mut matchers = Matchers::new();
/// matchers.push(SchemeMatcher::new(vec!["https"]));
/// matchers.push(PathMatcher::new("/health"));
/// matchers.push(HeaderMatcher::new(vec!["x-probe", "1"]).unwrap());
///
/// matchers.sort();
/// assert_eq!(matchers.ranks(), vec![Rank::Any, Rank::Path, Rank::Scheme]);
/// ```
#[derive(Default)]
pub struct Matchers {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Matchers {
    /// Creates a new, empty `Matchers`.
    pub fn new() -> Self {
        Matchers {
            matchers: Vec::new(),
        }
    }

    /// Appends a matcher to the end of the sequence.
    pub fn push<M>(&mut self, matcher: M)
    where
        M: Matcher + 'static,
    {
        self.matchers.push(Box::new(matcher));
    }

    /// Appends an already boxed matcher to the end of the sequence.
    pub fn push_boxed(&mut self, matcher: Box<dyn Matcher>) {
        self.matchers.push(matcher);
    }

    /// The number of matchers held.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether no matchers are held.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Iterates the matchers in their current order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.matchers.iter(),
        }
    }

    /// The rank of every matcher, in current order.
    pub fn ranks(&self) -> Vec<Rank> {
        self.iter().map(|matcher| matcher.rank()).collect()
    }

    /// Sorts the matchers ascending by rank. The sort is stable, so sorting an already sorted
    /// collection leaves it unchanged.
    pub fn sort(&mut self) {
        trace!(" sorting {} matchers by rank", self.matchers.len());
        self.matchers.sort_by_key(|matcher| matcher.rank());
    }

    /// Consumes the collection, returning it sorted by rank.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// Determines if every matcher accepts the request. An empty collection accepts every
    /// request.
    pub fn is_match(&self, state: &State) -> bool {
        let matched = self.iter().all(|matcher| matcher.is_match(state));
        trace!(
            "[{}] {} against {} matchers",
            request_id(state),
            if matched { "matched" } else { "did not match" },
            self.len()
        );
        matched
    }

    /// Returns the first matcher, in current order, that accepts the request.
    pub fn first_match(&self, state: &State) -> Option<&dyn Matcher> {
        self.iter().find(|matcher| matcher.is_match(state))
    }
}

impl fmt::Debug for Matchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matchers")
            .field("ranks", &self.ranks())
            .finish()
    }
}

impl From<Vec<Box<dyn Matcher>>> for Matchers {
    fn from(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Matchers { matchers }
    }
}

impl FromIterator<Box<dyn Matcher>> for Matchers {
    fn from_iter<T: IntoIterator<Item = Box<dyn Matcher>>>(iter: T) -> Self {
        Matchers {
            matchers: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Matcher>> for Matchers {
    fn extend<T: IntoIterator<Item = Box<dyn Matcher>>>(&mut self, iter: T) {
        self.matchers.extend(iter);
    }
}

impl IntoIterator for Matchers {
    type Item = Box<dyn Matcher>;
    type IntoIter = vec::IntoIter<Box<dyn Matcher>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchers.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matchers {
    type Item = &'a dyn Matcher;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a `Matchers` collection.
pub struct Iter<'a> {
    inner: slice::Iter<'a, Box<dyn Matcher>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a dyn Matcher;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|matcher| &**matcher)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
