//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse route patterns (`/api/v1/tweets/:tweet_id/comments`) into segments
//! - Match concrete paths and extract named parameters
//! - Rank patterns by specificity for precedence decisions
//!
//! # Design Decisions
//! - Patterns compiled once at startup, immutable afterwards
//! - No regex to guarantee O(segments) matching
//! - Static segments outrank parameter segments; deeper patterns outrank
//!   shallower ones sharing a prefix
//! - A trailing slash on the request path is equivalent to none

use std::fmt;

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal segment, matched case-sensitively.
    Static(String),
    /// Named parameter (`:id`), matches any single non-empty segment.
    Param(String),
}

/// Parameters extracted from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Relative specificity of a pattern.
///
/// Ordered so that a higher value wins: more static segments first, then
/// greater depth. Declaration order breaks remaining ties (handled by the
/// dispatcher, not here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    static_segments: usize,
    depth: usize,
}

/// A compiled URL path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string. Segments starting with `:` become parameters.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a concrete path, extracting parameters on success.
    ///
    /// The path is expected to be percent-decoded already; this stage does
    /// no decoding of its own.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let mut params = Vec::new();
        let mut segments = self.segments.iter();

        for part in split_path(path) {
            match segments.next()? {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_string())),
            }
        }

        // Path exhausted; the pattern must be too.
        if segments.next().is_some() {
            return None;
        }
        Some(PathParams(params))
    }

    /// Specificity used for precedence between overlapping patterns.
    pub fn specificity(&self) -> Specificity {
        Specificity {
            static_segments: self
                .segments
                .iter()
                .filter(|s| matches!(s, Segment::Static(_)))
                .count(),
            depth: self.segments.len(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Static(s) => write!(f, "/{}", s)?,
                Segment::Param(name) => write!(f, "/:{}", name)?,
            }
        }
        Ok(())
    }
}

/// Split a path into non-empty segments, ignoring leading/trailing slashes.
pub(crate) fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_pattern_matches_exactly() {
        let pattern = PathPattern::parse("/api/v1/tweets");
        assert!(pattern.matches("/api/v1/tweets").unwrap().is_empty());
        assert!(pattern.matches("/api/v1/tweets/").unwrap().is_empty());
        assert!(pattern.matches("/api/v1/tweets/1").is_none());
        assert!(pattern.matches("/api/v1").is_none());
    }

    #[test]
    fn params_are_extracted() {
        let pattern = PathPattern::parse("/api/v1/tweets/:tweet_id/comments");
        let params = pattern.matches("/api/v1/tweets/42/comments").unwrap();
        assert_eq!(params.get("tweet_id"), Some("42"));
        assert_eq!(params.get("id"), None);
    }

    #[test]
    fn param_segment_rejects_empty() {
        let pattern = PathPattern::parse("/api/v1/tweets/:id");
        assert!(pattern.matches("/api/v1/tweets//").is_none());
        assert!(pattern.matches("/api/v1/tweets").is_none());
    }

    #[test]
    fn static_outranks_param_at_same_depth() {
        let sign_in = PathPattern::parse("/api/v1/users/sign_in");
        let show = PathPattern::parse("/api/v1/users/:id");
        assert!(sign_in.specificity() > show.specificity());
    }

    #[test]
    fn deeper_outranks_shallower() {
        let nested = PathPattern::parse("/api/v1/tweets/:tweet_id/comments");
        let flat = PathPattern::parse("/api/v1/tweets/:id");
        assert!(nested.specificity() > flat.specificity());
    }

    #[test]
    fn display_round_trips() {
        let pattern = PathPattern::parse("/api/v1/rooms/:room_id/messages");
        assert_eq!(pattern.to_string(), "/api/v1/rooms/:room_id/messages");
    }
}
