//! Film records and the in-memory cache snapshot

use crate::error::{CacheError, CacheResult};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One entry of the cache array, kept exactly as the producer wrote it.
///
/// Only `title` is ever read, and only for records that are displayed. The
/// pipeline stores more (slug, year, rating, ...), which is never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmRecord(Value);

impl FilmRecord {
    /// Display title: strings as-is, any other JSON value as its JSON text.
    ///
    /// `None` if the record is not an object or has no `title` key.
    pub fn title(&self) -> Option<String> {
        match self.0.get("title")? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Raw JSON of the record.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for FilmRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The whole cache file parsed into memory, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheSnapshot {
    records: Vec<FilmRecord>,
}

impl CacheSnapshot {
    /// Parse raw file content. Anything but a top-level JSON array is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_slice(bytes)?;
        Ok(Self { records })
    }

    /// Read and parse the cache file at `path`.
    pub fn load(path: &Path) -> CacheResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| CacheError::from_io(path, e))?;
        Self::from_slice(&bytes).map_err(|source| CacheError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of films cached.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the cache array is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in file order.
    pub fn records(&self) -> &[FilmRecord] {
        &self.records
    }

    /// The first `min(n, len)` records.
    pub fn sample(&self, n: usize) -> &[FilmRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Titles of the first `min(n, len)` records.
    ///
    /// Records past the sample are never looked at. A sampled record without
    /// a `title` is a data error.
    pub fn sample_titles(&self, n: usize) -> Result<Vec<String>, serde_json::Error> {
        self.sample(n)
            .iter()
            .enumerate()
            .map(|(i, record)| {
                record.title().ok_or_else(|| {
                    serde_json::Error::custom(format!("record {i} has no `title` field"))
                })
            })
            .collect()
    }
}
