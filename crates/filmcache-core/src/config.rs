//! Runtime settings

use crate::cache::{CacheFile, DEFAULT_SAMPLE_SIZE};
use crate::expiry::{DEFAULT_MAX_AGE_DAYS, ExpiryPolicy};
use crate::paths::default_cache_path;
use std::path::PathBuf;

/// Where the cache lives and how it is judged.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    /// Location of the cache file.
    pub path: PathBuf,
    /// Expiry threshold in days.
    pub max_age_days: f64,
    /// How many titles a report samples.
    pub sample_size: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl CacheSettings {
    /// Override the cache location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Override the expiry threshold.
    pub fn with_max_age_days(mut self, days: f64) -> Self {
        self.max_age_days = days;
        self
    }

    /// Override the sample size.
    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    /// Expiry policy for these settings.
    pub fn policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::new(self.max_age_days)
    }

    /// Handle to the configured cache file.
    pub fn cache_file(&self) -> CacheFile {
        CacheFile::new(self.path.clone())
    }
}
