//! Cache inspection and removal
//!
//! [`CacheFile`] is the only thing this crate manages: one JSON file written by
//! the recommendation pipeline. Reading it yields a [`CacheReport`]; deleting it
//! forces the next pipeline run to fetch fresh data.

use crate::error::{CacheError, CacheResult};
use crate::expiry::{CacheAge, ExpiryPolicy, Verdict};
use crate::paths;
use crate::record::CacheSnapshot;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of sample titles shown by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Summary of the cache file at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheReport {
    /// Absolute location of the file.
    pub path: PathBuf,
    /// Last modification time.
    #[serde(rename = "modified_unix", serialize_with = "serialize_unix_secs")]
    pub modified: SystemTime,
    /// Number of film records in the file.
    pub film_count: usize,
    /// Age of the file.
    pub age_days: CacheAge,
    /// Threshold the verdict was computed against.
    pub max_age_days: f64,
    /// Days left before expiry; negative once expired.
    pub remaining_days: f64,
    /// Freshness verdict.
    pub verdict: Verdict,
    /// Titles of the first records, in file order.
    pub sample_titles: Vec<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_unix_secs<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    let secs = time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
    serializer.serialize_u64(secs)
}

/// Handle to the cache file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheFile {
    path: PathBuf,
}

impl CacheFile {
    /// Handle for the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Configured location, as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if something exists at the configured location.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Inspect the cache as of now.
    pub fn inspect(&self, policy: ExpiryPolicy, sample_size: usize) -> CacheResult<CacheReport> {
        self.inspect_at(policy, sample_size, SystemTime::now())
    }

    /// Inspect the cache as seen from `now`.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] if the file is absent, [`CacheError::Parse`] if
    /// it is not an array of titled records, [`CacheError::Io`] otherwise.
    pub fn inspect_at(
        &self,
        policy: ExpiryPolicy,
        sample_size: usize,
        now: SystemTime,
    ) -> CacheResult<CacheReport> {
        let modified = std::fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|e| CacheError::from_io(&self.path, e))?;
        let age = CacheAge::between(modified, now);

        let snapshot = CacheSnapshot::load(&self.path)?;
        let sample_titles =
            snapshot
                .sample_titles(sample_size)
                .map_err(|source| CacheError::Parse {
                    path: self.path.clone(),
                    source,
                })?;
        tracing::debug!(
            "Loaded {} films from {} ({:.2} days old)",
            snapshot.len(),
            self.path.display(),
            age.days()
        );

        Ok(CacheReport {
            path: paths::absolute(&self.path),
            modified,
            film_count: snapshot.len(),
            age_days: age,
            max_age_days: policy.max_age_days(),
            remaining_days: policy.remaining_days(age),
            verdict: policy.verdict(age),
            sample_titles,
        })
    }

    /// Delete the cache file.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] if there is nothing to delete, including when
    /// the file disappears between the caller's check and the unlink.
    /// [`CacheError::Io`] for any other failure (permissions, directories).
    pub fn delete(&self) -> CacheResult<()> {
        if let Err(e) = std::fs::remove_file(&self.path) {
            let err = CacheError::from_io(&self.path, e);
            if !err.is_not_found() {
                tracing::warn!("Failed to delete cache: {err}");
            }
            return Err(err);
        }
        tracing::info!("Deleted cache file {}", self.path.display());
        Ok(())
    }
}
