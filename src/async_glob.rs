// async_glob.rs
#[cfg(feature = "async")]
use crate::{
    error::{GlobError, TraversalError},
    normalize::{finalize, DedupSet},
    patterns::CompiledPattern,
    walk::{EntryInfo, EntryKind, Walker},
    GlobOptions, GlobResults,
};
#[cfg(feature = "async")]
use async_stream::stream;
#[cfg(feature = "async")]
use futures::{Stream, StreamExt};
#[cfg(feature = "async")]
use std::{io, path::Path};
#[cfg(feature = "async")]
use tokio::fs;

/// One event from the lazy traversal stream
#[cfg(feature = "async")]
#[derive(Debug)]
pub enum GlobEvent {
    /// A normalized, deduplicated matching path
    Match(std::path::PathBuf),

    /// A subtree that was skipped due to a soft I/O error
    Skipped(TraversalError),
}

#[cfg(feature = "async")]
/// Creates a lazily-produced stream of glob matches
///
/// Pattern compilation and cwd resolution happen eagerly, so fatal errors
/// surface before the stream exists. Each loop turn awaits exactly one
/// directory listing before yielding, which makes the stream a cooperative
/// suspension point per directory; dropping the stream cancels the walk
/// with no dangling background I/O, since no tasks are spawned. Multiple
/// patterns walk back to back over one shared dedup set.
///
/// Soft errors for each pattern's walk are flushed as
/// [`GlobEvent::Skipped`] events once that walk completes.
pub fn glob_stream<S: AsRef<str>>(
    patterns: &[S],
    opts: GlobOptions,
) -> Result<impl Stream<Item = GlobEvent>, GlobError> {
    let compiled = CompiledPattern::compile_many(patterns)?;
    let cwd = opts.resolve_cwd()?;

    Ok(stream! {
        let mut seen = DedupSet::default();

        for pattern in &compiled {
            let mut walker = Walker::new(pattern, cwd.clone(), &opts);

            while let Some(frame) = walker.pop() {
                let listing =
                    list_dir(&frame.dir, opts.follow_symlinks, walker.skipped_mut()).await;
                match listing {
                    Ok(entries) => {
                        for m in walker.process(frame, entries) {
                            let path = finalize(&m, opts.absolute, &cwd);
                            if seen.insert(&path) {
                                yield GlobEvent::Match(path);
                            }
                        }
                    }
                    Err(err) => walker.record(frame.dir, err),
                }
            }

            for skipped in walker.finish() {
                yield GlobEvent::Skipped(skipped);
            }
        }
    })
}

#[cfg(feature = "async")]
/// Performs asynchronous glob pattern matching
///
/// Drains the traversal stream to completion and collects matches plus
/// soft-error diagnostics. Equivalent to [`crate::glob_sync`] over the
/// same tree and options.
pub async fn glob<S: AsRef<str>>(
    patterns: &[S],
    opts: GlobOptions,
) -> Result<GlobResults, GlobError> {
    let stream = glob_stream(patterns, opts)?;
    futures::pin_mut!(stream);

    let mut results = GlobResults::default();
    while let Some(event) = stream.next().await {
        match event {
            GlobEvent::Match(path) => results.paths.push(path),
            GlobEvent::Skipped(err) => results.skipped.push(err),
        }
    }

    Ok(results)
}

#[cfg(feature = "async")]
/// Lists one directory with tokio, resolving entry kinds for the planner
///
/// Mirrors the blocking lister in `sync.rs`: non-UTF-8 names are skipped,
/// followed symlinks take their target's kind, directories get canonical
/// paths for the cycle guard, and per-entry failures become soft errors.
async fn list_dir(
    dir: &Path,
    follow_symlinks: bool,
    skipped: &mut Vec<TraversalError>,
) -> io::Result<Vec<EntryInfo>> {
    let mut rd = fs::read_dir(dir).await?;
    let mut out = Vec::new();

    loop {
        let entry = match rd.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(err) => {
                skipped.push(TraversalError::new(dir.to_path_buf(), err));
                break;
            }
        };

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let path = entry.path();

        let file_type = match entry.file_type().await {
            Ok(t) => t,
            Err(err) => {
                skipped.push(TraversalError::new(path, err));
                continue;
            }
        };

        let (kind, real) = if file_type.is_symlink() {
            if follow_symlinks {
                match fs::metadata(&path).await {
                    Ok(meta) if meta.is_dir() => {
                        (EntryKind::Dir, fs::canonicalize(&path).await.ok())
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
                fs::canonicalize(&path).await.ok()
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

    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}
