// normalize.rs
use crate::walk::MatchResult;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Converts a walker match into its public path shape
///
/// Relative to the walk root by default, rooted at the resolved cwd when
/// `absolute` is set. Directory results carry no trailing separator, so
/// files and directories share one path shape.
pub(crate) fn finalize(result: &MatchResult, absolute: bool, cwd: &Path) -> PathBuf {
    let rel = result.rel.as_str();
    let rel = rel.strip_suffix('/').unwrap_or(rel);

    if absolute {
        cwd.join(rel)
    } else {
        PathBuf::from(rel)
    }
}

/// First-seen dedup over normalized paths
///
/// Multiple patterns are unioned; the first occurrence wins and insertion
/// order is discovery order.
#[derive(Default)]
pub(crate) struct DedupSet {
    seen: HashSet<PathBuf>,
}

impl DedupSet {
    /// Returns true when the path has not been seen before
    pub fn insert(&mut self, path: &Path) -> bool {
        self.seen.insert(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{EntryKind, MatchResult};
    use camino::Utf8PathBuf;

    fn result(rel: &str) -> MatchResult {
        MatchResult {
            rel: Utf8PathBuf::from(rel),
            kind: EntryKind::File,
        }
    }

    #[test]
    fn test_relative_and_absolute() {
        let m = result("a/b.txt");
        assert_eq!(finalize(&m, false, Path::new("/root")), Path::new("a/b.txt"));
        assert_eq!(
            finalize(&m, true, Path::new("/root")),
            Path::new("/root/a/b.txt")
        );
    }

    #[test]
    fn test_trailing_separator_stripped() {
        let m = MatchResult {
            rel: Utf8PathBuf::from("sub/"),
            kind: EntryKind::Dir,
        };
        assert_eq!(finalize(&m, false, Path::new("/root")), Path::new("sub"));
    }

    #[test]
    fn test_dedup_first_seen_wins() {
        let mut seen = DedupSet::default();
        assert!(seen.insert(Path::new("file.txt")));
        assert!(!seen.insert(Path::new("file.txt")));
        assert!(seen.insert(Path::new("other.txt")));
    }
}
