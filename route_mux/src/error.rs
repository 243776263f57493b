//! Errors raised while constructing matchers.
//!
//! Matching itself never fails: a request that lacks the data a matcher inspects simply does not
//! match.

use thiserror::Error;

/// An error preventing a matcher from being constructed.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// A flat key/value list had an odd number of items.
    #[error("mux: number of parameters must be multiple of 2, got {len} (uneven pairs)")]
    UnevenPairs {
        /// Length of the offending list.
        len: usize,
    },

    /// A pattern could not be compiled.
    #[error("mux: invalid pattern `{pattern}`: {source}")]
    Pattern {
        /// The anchored pattern text handed to the regex engine.
        pattern: String,
        /// The underlying compilation failure.
        #[source]
        source: regex::Error,
    },
}

/// An implementation of the single-parameter Result pattern, using `MatcherError`.
pub type Result<T> = std::result::Result<T, MatcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uneven_pairs_message() {
        let e = MatcherError::UnevenPairs { len: 3 };
        assert!(e.to_string().contains("uneven pairs"));
        assert!(e.to_string().contains('3'));
    }
}
