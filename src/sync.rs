// sync.rs
use crate::{
    error::{GlobError, TraversalError},
    normalize::{finalize, DedupSet},
    patterns::CompiledPattern,
    walk::{EntryInfo, EntryKind, MatchResult, Walker},
    GlobOptions, GlobResults,
};
use rayon::prelude::*;
use std::{fs, io, path::Path};

/// Performs synchronous glob pattern matching
///
/// Compiles every pattern up front (fatal errors surface before any
/// traversal), walks each pattern's tree to completion, then merges the
/// per-pattern results in pattern order with first-seen dedup. Independent
/// patterns walk on rayon worker threads; the merge is the only shared
/// step.
///
/// # Errors
///
/// Returns `GlobError` for invalid patterns or an invalid working
/// directory. Per-directory I/O failures do not error; they are collected
/// into [`GlobResults::skipped`].
pub fn glob_sync<S>(patterns: &[S], opts: GlobOptions) -> Result<GlobResults, GlobError>
where
    S: AsRef<str> + Sync,
{
    let compiled = CompiledPattern::compile_many(patterns)?;
    let cwd = opts.resolve_cwd()?;

    let walks: Vec<(Vec<MatchResult>, Vec<TraversalError>)> = if compiled.len() > 1 {
        compiled
            .par_iter()
            .map(|pattern| walk_tree(pattern, &cwd, &opts))
            .collect()
    } else {
        compiled
            .iter()
            .map(|pattern| walk_tree(pattern, &cwd, &opts))
            .collect()
    };

    let mut seen = DedupSet::default();
    let mut results = GlobResults::default();
    for (matches, skipped) in walks {
        for m in &matches {
            let path = finalize(m, opts.absolute, &cwd);
            if seen.insert(&path) {
                results.paths.push(path);
            }
        }
        results.skipped.extend(skipped);
    }

    Ok(results)
}

/// Walks one pattern's tree to completion with the blocking lister
pub(crate) fn walk_tree(
    pattern: &CompiledPattern,
    cwd: &Path,
    opts: &GlobOptions,
) -> (Vec<MatchResult>, Vec<TraversalError>) {
    let mut walker = Walker::new(pattern, cwd.to_path_buf(), opts);
    let mut matches = Vec::new();

    while let Some(frame) = walker.pop() {
        let listing = list_dir(&frame.dir, opts.follow_symlinks, walker.skipped_mut());
        match listing {
            Ok(entries) => matches.extend(walker.process(frame, entries)),
            Err(err) => walker.record(frame.dir, err),
        }
    }

    (matches, walker.finish())
}

/// Lists one directory, resolving entry kinds for the planner
///
/// Non-UTF-8 entry names are skipped. When following symlinks, a link's
/// kind comes from its target and directories get their canonical path for
/// the cycle guard; a broken link is a soft error. When not following,
/// symlinks keep their own entry kind: matchable, never descended.
fn list_dir(
    dir: &Path,
    follow_symlinks: bool,
    skipped: &mut Vec<TraversalError>,
) -> io::Result<Vec<EntryInfo>> {
    let mut out = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                skipped.push(TraversalError::new(dir.to_path_buf(), err));
                continue;
            }
        };

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let path = entry.path();

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                skipped.push(TraversalError::new(path, err));
                continue;
            }
        };

        let (kind, real) = if file_type.is_symlink() {
            if follow_symlinks {
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_dir() => {
                        (EntryKind::Dir, fs::canonicalize(&path).ok())
                    }
                    Ok(_) => (EntryKind::File, None),
                    Err(err) => {
                        skipped.push(TraversalError::new(path, err));
                        continue;
                    }
                }
            } else {
                (EntryKind::File, None)
            }
        } else if file_type.is_dir() {
            let real = if follow_symlinks {
                fs::canonicalize(&path).ok()
            } else {
                None
            };
            (EntryKind::Dir, real)
        } else {
            (EntryKind::File, None)
        };

        out.push(EntryInfo {
            name,
            path,
            kind,
            real,
        });
    }

    // Deterministic discovery order regardless of readdir order
    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}
