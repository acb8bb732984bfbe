// lib.rs
#![forbid(unsafe_code)]

#[cfg(feature = "async")]
pub mod async_glob;
pub mod error;
mod normalize;
pub mod options;
pub mod patterns;
pub mod sync;
mod walk;
pub mod windows;

pub use crate::error::{GlobError, TraversalError};
pub use crate::options::{GlobOptions, GlobOptionsBuilder};
pub use crate::patterns::CompiledPattern;
pub use crate::sync::glob_sync;

#[cfg(feature = "async")]
pub use crate::async_glob::{glob, glob_stream, GlobEvent};

use std::path::PathBuf;

/// Outcome of a completed glob call
///
/// Matching paths in discovery order, first occurrence winning across
/// patterns, plus the soft-error diagnostics for any subtrees that could
/// not be read. Partial results and hard failure are never mixed: fatal
/// errors surface as `Err(GlobError)` before any traversal output exists.
#[derive(Debug, Default)]
pub struct GlobResults {
    /// Matching paths, cwd-relative unless `absolute` was requested
    pub paths: Vec<PathBuf>,

    /// Subtrees skipped due to non-fatal I/O errors
    pub skipped: Vec<TraversalError>,
}

/// Main facade for the globtrail library
///
/// High-level entry points for both synchronous and asynchronous glob
/// matching over a directory tree.
pub struct GlobTrail;

impl GlobTrail {
    /// Performs synchronous glob pattern matching
    ///
    /// Walks the working directory depth-first for each pattern and
    /// returns the unioned, deduplicated matches.
    ///
    /// # Arguments
    ///
    /// * `patterns` - Glob patterns to match (unioned)
    /// * `opts` - Configuration options
    ///
    /// # Returns
    ///
    /// `Ok(GlobResults)` with matching paths and soft-error diagnostics,
    /// or `Err(GlobError)` for invalid patterns or an invalid cwd
    ///
    /// # Examples
    ///
    /// ```
    /// use globtrail::{GlobTrail, GlobOptions};
    ///
    /// let results = GlobTrail::sync(&["*.toml", "src/*.rs"], GlobOptions::default()).unwrap();
    /// for path in &results.paths {
    ///     println!("{}", path.display());
    /// }
    /// ```
    pub fn sync(patterns: &[&str], opts: GlobOptions) -> Result<GlobResults, GlobError> {
        crate::sync::glob_sync(patterns, opts)
    }

    /// Creates a lazy stream of glob matches
    ///
    /// The stream performs one directory listing per suspension point and
    /// stops issuing I/O as soon as it is dropped, so wrapping it with an
    /// external cancellation signal (timeout, select) yields partial
    /// results without error.
    ///
    /// # Returns
    ///
    /// `Ok(impl Stream<Item = GlobEvent>)` on success, or `Err(GlobError)`
    /// if pattern compilation or cwd resolution fails
    #[cfg(feature = "async")]
    pub fn stream(
        patterns: &[&str],
        opts: GlobOptions,
    ) -> Result<impl futures::Stream<Item = GlobEvent>, GlobError> {
        // Own the patterns so the returned stream is independent of the
        // slice borrow
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        crate::async_glob::glob_stream(&patterns, opts)
    }
}
