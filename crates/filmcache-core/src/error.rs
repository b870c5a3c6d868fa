//! Errors for cache inspection and removal

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type CacheResult<T> = Result<T, CacheError>;

/// Everything that can go wrong while reading or deleting the cache file.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No cache file exists at the configured location.
    #[error("no cache file at {}", .path.display())]
    NotFound {
        /// Location that was looked up.
        path: PathBuf,
    },

    /// The file is not a JSON array, or a displayed record has no `title`.
    #[error("invalid cache data in {}: {source}", .path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Stat, read or delete failed for a reason other than absence.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Offending file.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl CacheError {
    /// Map an I/O error, folding `ErrorKind::NotFound` into [`CacheError::NotFound`].
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Stable machine-readable tag (`not_found`, `parse`, `io`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Parse { .. } => "parse",
            Self::Io { .. } => "io",
        }
    }

    /// Path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Parse { path, .. } | Self::Io { path, .. } => path,
        }
    }

    /// True for the informational "nothing there" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
