// windows.rs
/// Ensures a path has the long path prefix on Windows
///
/// Paths longer than MAX_PATH need the "\\?\" prefix to traverse deep
/// trees; the resolved working directory gets it once, before the walk.
#[cfg(windows)]
pub fn ensure_long_path_prefix(p: &std::path::Path) -> std::path::PathBuf {
    let s = p.to_string_lossy();

    if s.starts_with("\\\\?\\") {
        return p.to_path_buf();
    }

    let mut prefixed = String::from("\\\\?\\");
    prefixed.push_str(&s);
    std::path::PathBuf::from(prefixed)
}

/// No-op implementation for non-Windows platforms
#[cfg(not(windows))]
pub fn ensure_long_path_prefix(p: &std::path::Path) -> std::path::PathBuf {
    p.to_path_buf()
}
