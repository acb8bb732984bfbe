// error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error types for glob operations
///
/// Every variant here is raised before any traversal output is produced:
/// a call either fails with a `GlobError` or completes with results plus
/// a (possibly empty) list of [`TraversalError`] diagnostics, never both.
#[derive(Error, Debug)]
pub enum GlobError {
    /// I/O error outside of traversal (e.g. resolving the process cwd)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Regex compilation error for a wildcard segment
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Invalid pattern syntax (empty pattern, unbalanced character class)
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Pattern contains a `..` segment
    #[error("Path traversal not allowed")]
    PathTraversal,

    /// Working directory does not exist or is not a directory
    #[error("Invalid working directory {}: {source}", path.display())]
    InvalidCwd { path: PathBuf, source: io::Error },
}

/// A non-fatal, per-subtree traversal failure
///
/// Produced when a single directory cannot be listed (permissions, vanished
/// entry). The affected subtree is treated as empty and the walk continues;
/// callers needing visibility inspect the diagnostics attached to the result.
#[derive(Error, Debug)]
#[error("Skipped {}: {source}", path.display())]
pub struct TraversalError {
    /// Directory or entry that could not be read
    pub path: PathBuf,

    /// Underlying I/O error
    pub source: io::Error,
}

impl TraversalError {
    pub(crate) fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }
}
