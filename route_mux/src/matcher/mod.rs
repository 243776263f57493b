//! Defines the `Matcher` trait, its `Rank`, and the default implementations.

pub mod comparison;
pub mod config;
pub mod func;
pub mod header;
pub mod map;
pub mod path;
pub mod regex;
pub mod scheme;

use std::fmt;
use std::panic::RefUnwindSafe;

use crate::state::State;

pub use self::func::MatcherFn;
pub use self::header::{HeaderMatcher, HeaderRegexMatcher};
pub use self::path::{PathMatcher, PathRegexMatcher, PathWithVarsMatcher};
pub use self::scheme::SchemeMatcher;

/// The class a `Matcher` belongs to when a collection of matchers is ordered.
///
/// Ranks only order matchers; they never decide whether a request matches. Sorting ascending
/// places `Any` first, then `Path`, then `Scheme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Header and function matchers.
    Any = 0,
    /// Exact, placeholder and pattern path matchers.
    Path = 1,
    /// Scheme matchers.
    Scheme = 2,
}

impl Rank {
    /// The numeric value used as the sort key.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Any => "any",
            Rank::Path => "path",
            Rank::Scheme => "scheme",
        };
        f.write_str(name)
    }
}

/// Determines if pre-defined conditions required for the associated route have been met by the
/// request held in `State`.
///
/// Implementations must be pure and total: `is_match` answers `false` for any request lacking the
/// data it inspects, and `rank` is a constant for the implementing type. Instances are shared
/// across concurrent requests once built.
pub trait Matcher: RefUnwindSafe + Send + Sync {
    /// Determines if the `Request` meets pre-defined conditions.
    fn is_match(&self, state: &State) -> bool;

    /// The ordering class of this matcher.
    fn rank(&self) -> Rank;
}

impl<M> Matcher for Box<M>
where
    M: Matcher + ?Sized,
{
    fn is_match(&self, state: &State) -> bool {
        (**self).is_match(state)
    }

    fn rank(&self) -> Rank {
        (**self).rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Any.value(), 0);
        assert_eq!(Rank::Path.value(), 1);
        assert_eq!(u8::from(Rank::Scheme), 2);
        assert!(Rank::Any < Rank::Path && Rank::Path < Rank::Scheme);
        assert_eq!(Rank::Path.to_string(), "path");
    }
}
