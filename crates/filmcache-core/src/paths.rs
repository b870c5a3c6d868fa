//! Cache file location

use std::path::{Path, PathBuf};

/// File name of the popular films cache written by the recommendation pipeline.
pub const CACHE_FILE_NAME: &str = "letterboxd_popular_cache.json";

/// Returns the directory holding the running executable, or None if it cannot be resolved.
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Default cache location: next to the executable.
///
/// Falls back to the bare file name (relative to the working directory) when
/// the executable location is unknown.
pub fn default_cache_path() -> PathBuf {
    exe_dir().map_or_else(
        || PathBuf::from(CACHE_FILE_NAME),
        |dir| dir.join(CACHE_FILE_NAME),
    )
}

/// Absolute form of `path` for display. Relative paths are joined onto the
/// current directory; symlinks are not resolved.
pub fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}
