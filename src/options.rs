// options.rs
use crate::error::GlobError;
use std::{fs, io, path::PathBuf};

/// Configuration options for glob operations
///
/// A snapshot constructed once per call; the traversal never mutates it.
#[derive(Clone, Debug)]
pub struct GlobOptions {
    /// Base directory for matching and relative output (None = process cwd)
    pub cwd: Option<PathBuf>,

    /// Whether to return absolute paths instead of cwd-relative ones
    pub absolute: bool,

    /// Whether entries whose name starts with `.` are eligible
    pub dot: bool,

    /// Whether to descend into symlinked directories
    pub follow_symlinks: bool,

    /// Whether to suppress directory entries from results
    pub only_files: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            absolute: false,
            dot: false,
            follow_symlinks: true,
            only_files: true,
        }
    }
}

impl GlobOptions {
    /// Resolves the working directory to a canonical absolute path
    ///
    /// Fails with [`GlobError::InvalidCwd`] before any traversal begins when
    /// the directory does not exist or is not a directory.
    pub(crate) fn resolve_cwd(&self) -> Result<PathBuf, GlobError> {
        let base = match &self.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let canonical = fs::canonicalize(&base).map_err(|source| GlobError::InvalidCwd {
            path: base.clone(),
            source,
        })?;

        if !canonical.is_dir() {
            return Err(GlobError::InvalidCwd {
                path: base,
                source: io::Error::new(io::ErrorKind::Other, "not a directory"),
            });
        }

        Ok(crate::windows::ensure_long_path_prefix(&canonical))
    }
}

/// Builder for GlobOptions for fluent configuration
pub struct GlobOptionsBuilder(GlobOptions);

impl Default for GlobOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobOptionsBuilder {
    /// Creates a new builder with default options
    pub fn new() -> Self {
        Self(GlobOptions::default())
    }

    /// Sets the base directory for matching and relative output
    pub fn cwd(mut self, dir: PathBuf) -> Self {
        self.0.cwd = Some(dir);
        self
    }

    /// Sets whether to return absolute paths
    pub fn absolute(mut self, v: bool) -> Self {
        self.0.absolute = v;
        self
    }

    /// Sets whether hidden entries (leading `.`) are eligible
    pub fn dot(mut self, v: bool) -> Self {
        self.0.dot = v;
        self
    }

    /// Sets whether to descend into symlinked directories
    pub fn follow_symlinks(mut self, v: bool) -> Self {
        self.0.follow_symlinks = v;
        self
    }

    /// Sets whether directory entries are suppressed from results
    pub fn only_files(mut self, v: bool) -> Self {
        self.0.only_files = v;
        self
    }

    /// Builds the final GlobOptions instance
    pub fn build(self) -> GlobOptions {
        self.0
    }
}
