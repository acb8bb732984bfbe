// tests/async_stream.rs
#![cfg(feature = "async")]

use futures::{pin_mut, StreamExt};
use globtrail::{glob, glob_stream, glob_sync, GlobEvent, GlobOptionsBuilder, GlobTrail};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"content").unwrap();
}

fn fixture() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), "a/b/c.txt");
    touch(tmp.path(), "a/.hidden.txt");
    touch(tmp.path(), "d.txt");
    touch(tmp.path(), "notes.md");
    tmp
}

fn opts(root: &Path) -> GlobOptionsBuilder {
    GlobOptionsBuilder::new().cwd(root.to_path_buf())
}

fn path_set(paths: &[std::path::PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_async_matches_sync() {
    let tmp = fixture();
    for pattern in ["**/*.txt", "*", "a/*/*.txt", "**/*.md"] {
        let eager = glob_sync(&[pattern], opts(tmp.path()).build()).unwrap();
        let lazy = glob(&[pattern], opts(tmp.path()).build()).await.unwrap();

        assert_eq!(
            path_set(&eager.paths),
            path_set(&lazy.paths),
            "pattern {pattern:?} diverged between modes"
        );
    }
}

#[tokio::test]
async fn test_async_matches_sync_with_options() {
    let tmp = fixture();
    let eager = glob_sync(
        &["**/*"],
        opts(tmp.path()).dot(true).only_files(false).build(),
    )
    .unwrap();
    let lazy = glob(
        &["**/*"],
        opts(tmp.path()).dot(true).only_files(false).build(),
    )
    .await
    .unwrap();

    assert_eq!(path_set(&eager.paths), path_set(&lazy.paths));
}

#[tokio::test]
async fn test_stream_dedups_across_patterns() {
    let tmp = fixture();
    let stream = glob_stream(&["*.txt", "d.txt"], opts(tmp.path()).build()).unwrap();
    pin_mut!(stream);

    let mut matched = Vec::new();
    while let Some(event) = stream.next().await {
        if let GlobEvent::Match(path) = event {
            matched.push(path);
        }
    }

    assert_eq!(
        matched
            .iter()
            .filter(|p| p.as_path() == Path::new("d.txt"))
            .count(),
        1
    );
}

#[tokio::test]
async fn test_stream_can_be_dropped_early() {
    let tmp = fixture();
    let stream = glob_stream(&["**/*"], opts(tmp.path()).build()).unwrap();
    pin_mut!(stream);

    // Take a single event; the rest of the walk is discarded with the stream
    let first = stream.next().await;
    assert!(first.is_some());
}

#[tokio::test]
async fn test_stream_compile_errors_are_eager() {
    let tmp = fixture();
    assert!(glob_stream(&["src/[ab"], opts(tmp.path()).build()).is_err());
}

#[tokio::test]
async fn test_facade_stream_owns_its_patterns() {
    let tmp = fixture();

    // The stream must stay usable after the pattern slice goes away
    let stream = {
        let patterns = vec![String::from("**/*.txt")];
        let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
        GlobTrail::stream(&refs, opts(tmp.path()).build()).unwrap()
    };
    pin_mut!(stream);

    let mut matched = 0;
    while let Some(event) = stream.next().await {
        if matches!(event, GlobEvent::Match(_)) {
            matched += 1;
        }
    }
    assert_eq!(matched, 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_broken_symlink_yields_skipped_diagnostic() {
    use std::os::unix::fs::symlink;

    let tmp = fixture();
    symlink(tmp.path().join("missing"), tmp.path().join("broken.txt")).unwrap();

    let results = glob(&["*.txt"], opts(tmp.path()).build()).await.unwrap();
    assert!(path_set(&results.paths).contains("d.txt"));
    assert_eq!(results.skipped.len(), 1);
    assert!(results.skipped[0].path.ends_with("broken.txt"));
}
