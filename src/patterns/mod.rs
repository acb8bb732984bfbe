// patterns/mod.rs
pub mod cache;
pub mod wildcard;

use crate::error::GlobError;
use regex::Regex;

pub use cache::CacheMetrics;

/// One compiled pattern segment
///
/// A pattern is an ordered list of these; each consumes path-segment
/// levels during the walk.
#[derive(Clone, Debug)]
pub enum Segment {
    /// Exact name match, consumes one level
    Literal(String),
    /// Shell-style single-segment wildcard, consumes one level
    Wildcard {
        /// Original segment text, kept for the hidden-file policy check
        raw: String,
        /// Anchored regex compiled from the segment
        matcher: Regex,
    },
    /// `**`: matches zero or more full segments at any depth
    Globstar,
}

impl Segment {
    /// Tests a single path-segment name against this compiled segment
    ///
    /// Dot policy: when `dot` is false, a name starting with `.` matches
    /// only if the pattern segment itself explicitly starts with `.`. This
    /// holds for `*` and `**` as well, mirroring shell hidden-file
    /// suppression.
    pub fn matches(&self, name: &str, dot: bool) -> bool {
        if !dot && name.starts_with('.') && !self.starts_with_dot() {
            return false;
        }

        match self {
            Segment::Literal(lit) => lit == name,
            Segment::Wildcard { matcher, .. } => matcher.is_match(name),
            Segment::Globstar => true,
        }
    }

    fn starts_with_dot(&self) -> bool {
        match self {
            Segment::Literal(lit) => lit.starts_with('.'),
            Segment::Wildcard { raw, .. } => raw.starts_with('.'),
            Segment::Globstar => false,
        }
    }
}

/// A glob pattern compiled into an ordered segment list
///
/// Immutable after construction. `Send + Sync`, so walks for independent
/// patterns may run on worker threads.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    segments: Vec<Segment>,
}

impl CompiledPattern {
    /// Compiles a glob pattern string
    ///
    /// Splits on `/` (and the platform separator on Windows), then
    /// classifies each segment: exactly `**` becomes Globstar (consecutive
    /// ones collapse), anything containing `*`, `?`, `[`, or an escape
    /// becomes Wildcard, all else Literal. `.` segments and empty segments
    /// from doubled or trailing separators are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GlobError::InvalidPattern` for an empty pattern or an
    /// unbalanced character class, `GlobError::PathTraversal` for a `..`
    /// segment.
    pub fn compile(pattern: &str) -> Result<Self, GlobError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(GlobError::InvalidPattern("empty pattern".into()));
        }

        let mut segments = Vec::new();
        for raw in split_separators(trimmed) {
            if raw.is_empty() || raw == "." {
                continue;
            }
            if raw == ".." {
                return Err(GlobError::PathTraversal);
            }
            if raw == "**" {
                if !matches!(segments.last(), Some(Segment::Globstar)) {
                    segments.push(Segment::Globstar);
                }
                continue;
            }
            if is_wildcard(raw) {
                let matcher = cache::get_or_compile(&wildcard::segment_to_regex(raw)?)?;
                segments.push(Segment::Wildcard {
                    raw: raw.to_string(),
                    matcher,
                });
            } else {
                segments.push(Segment::Literal(raw.to_string()));
            }
        }

        if segments.is_empty() {
            return Err(GlobError::InvalidPattern(format!(
                "pattern {trimmed:?} has no path segments"
            )));
        }

        Ok(Self { segments })
    }

    /// Compiles multiple patterns independently
    ///
    /// No cross-pattern merging happens here; each pattern later drives
    /// its own walk and results are unioned afterwards.
    pub fn compile_many<I, S>(patterns: I) -> Result<Vec<Self>, GlobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|p| Self::compile(p.as_ref()))
            .collect()
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Splits a pattern on logical path separators
///
/// `/` always separates; on Windows the native `\` does too, which means
/// backslash escapes are a Unix-only affordance there.
fn split_separators(pattern: &str) -> impl Iterator<Item = &str> {
    pattern.split(|c| c == '/' || (cfg!(windows) && c == '\\'))
}

fn is_wildcard(segment: &str) -> bool {
    segment
        .chars()
        .any(|c| matches!(c, '*' | '?' | '[' | '\\'))
}

/// Returns metrics for the wildcard segment regex cache
pub fn cache_metrics() -> CacheMetrics {
    cache::cache_metrics()
}
