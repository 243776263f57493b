//! Route Mux &ndash; ranked request matchers for HTTP routers.
//!
//! A router registers one or more [`Matcher`](matcher::Matcher) values per route (scheme, path,
//! headers) and asks each of them whether an incoming request satisfies it. When several
//! candidates could apply, a [`Matchers`](matchers::Matchers) collection orders them by
//! [`Rank`](matcher::Rank) so that consumers iterating the collection see them in a fixed,
//! deterministic order.
//!
//! Requests are presented to matchers through [`State`](state::State), which holds the request
//! `Uri` and `HeaderMap`.
#![warn(missing_docs, deprecated)]
#![doc(test(no_crate_inject, attr(deny(warnings))))]

pub mod error;
pub mod matcher;
pub mod matchers;
pub mod state;

/// Re-export hyper
pub use hyper;

pub use crate::error::{MatcherError, Result};
pub use crate::matcher::{Matcher, Rank};
pub use crate::matchers::Matchers;
