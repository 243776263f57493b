//! Declarative route criteria, for routers that load their routes from configuration.

use serde::Deserialize;

use crate::error::Result;
use crate::matcher::{
    HeaderMatcher, HeaderRegexMatcher, PathMatcher, PathRegexMatcher, PathWithVarsMatcher,
    SchemeMatcher,
};
use crate::matchers::Matchers;

/// The criteria one route places on requests. Every field is optional; each present criterion
/// becomes one matcher.
///
/// # Examples
///
/// ```rust
/// use route_mux::matcher::config::RouteCriteria;
/// use route_mux::Rank;
///
/// let criteria = RouteCriteria {
///     schemes: vec!["https".to_owned()],
///     path_template: Some("/users/:number".to_owned()),
///     headers: vec!["accept".to_owned(), "application/json".to_owned()],
///     ..RouteCriteria::default()
/// };
///
/// let matchers = criteria.build().unwrap();
/// assert_eq!(matchers.ranks(), vec![Rank::Any, Rank::Path, Rank::Scheme]);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RouteCriteria {
    /// Accepted URL schemes, compared case-insensitively.
    pub schemes: Vec<String>,
    /// A literal path.
    pub path: Option<String>,
    /// A path template with `:number` and `:string` placeholders.
    pub path_template: Option<String>,
    /// A path pattern.
    pub path_pattern: Option<String>,
    /// Alternating header names and exact values.
    pub headers: Vec<String>,
    /// Alternating header names and value patterns.
    pub header_patterns: Vec<String>,
}

impl RouteCriteria {
    /// Builds one matcher per present criterion and sorts them by rank. The first construction
    /// error is returned.
    pub fn build(&self) -> Result<Matchers> {
        let mut matchers = Matchers::new();

        if !self.schemes.is_empty() {
            matchers.push(SchemeMatcher::new(&self.schemes));
        }
        if let Some(path) = &self.path {
            matchers.push(PathMatcher::new(path.as_str()));
        }
        if let Some(template) = &self.path_template {
            matchers.push(PathWithVarsMatcher::new(template)?);
        }
        if let Some(pattern) = &self.path_pattern {
            matchers.push(PathRegexMatcher::new(pattern)?);
        }
        if !self.headers.is_empty() {
            matchers.push(HeaderMatcher::new(self.headers.iter().cloned())?);
        }
        if !self.header_patterns.is_empty() {
            matchers.push(HeaderRegexMatcher::new(self.header_patterns.iter().cloned())?);
        }

        matchers.sort();
        Ok(matchers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hyper::{HeaderMap, Request};

    use crate::error::MatcherError;
    use crate::matcher::Rank;
    use crate::state::State;

    #[test]
    fn empty_criteria_builds_nothing() {
        let matchers = RouteCriteria::default().build().unwrap();
        assert!(matchers.is_empty());
    }

    #[test]
    fn deserializes_and_builds_sorted() {
        let criteria: RouteCriteria = serde_json::from_str(
            r#"{
                "schemes": ["HTTPS"],
                "path_pattern": "/files/[0-9]+",
                "header_patterns": ["x-tenant", "[a-z]+"]
            }"#,
        )
        .unwrap();

        let matchers = criteria.build().unwrap();
        assert_eq!(matchers.ranks(), vec![Rank::Any, Rank::Path, Rank::Scheme]);

        let req = Request::get("https://example.com/files/12")
            .header("x-tenant", "acme")
            .body(())
            .unwrap();
        assert!(matchers.is_match(&State::from_request(req)));

        let req = Request::get("http://example.com/files/12")
            .header("x-tenant", "acme")
            .body(())
            .unwrap();
        assert!(!matchers.is_match(&State::from_request(req)));
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed = serde_json::from_str::<RouteCriteria>(r#"{ "method": "GET" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn propagates_construction_errors() {
        let criteria = RouteCriteria {
            headers: vec!["accept".to_owned()],
            ..RouteCriteria::default()
        };
        assert!(matches!(
            criteria.build(),
            Err(MatcherError::UnevenPairs { len: 1 })
        ));

        let criteria = RouteCriteria {
            path_template: Some("/:number/(".to_owned()),
            ..RouteCriteria::default()
        };
        assert!(matches!(criteria.build(), Err(MatcherError::Pattern { .. })));
    }

    #[test]
    fn literal_path_and_headers() {
        let criteria = RouteCriteria {
            path: Some("/health".to_owned()),
            headers: vec!["x-probe".to_owned(), "1".to_owned()],
            ..RouteCriteria::default()
        };
        let matchers = criteria.build().unwrap();

        State::with_new(|state| {
            state.put(hyper::Uri::from_static("/health"));
            let mut headers = HeaderMap::new();
            headers.insert("x-probe", "1".parse().unwrap());
            state.put(headers);
            assert!(matchers.is_match(state));
        });
    }
}
