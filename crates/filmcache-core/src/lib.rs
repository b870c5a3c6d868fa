//! filmcache-core - popular films cache inspection
//!
//! The recommendation pipeline keeps the films it scraped in a single JSON
//! file, `letterboxd_popular_cache.json`, next to the executable. This crate
//! reads that file's age and contents and deletes it on request. It never
//! writes the file.
//!
//! ```no_run
//! use filmcache_core::CacheSettings;
//!
//! let settings = CacheSettings::default();
//! match settings.cache_file().inspect(settings.policy(), settings.sample_size) {
//!     Ok(report) => println!("{} films, {}", report.film_count, report.verdict),
//!     Err(e) if e.is_not_found() => println!("no cache"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod expiry;
pub mod paths;
pub mod record;

pub use cache::{CacheFile, CacheReport, DEFAULT_SAMPLE_SIZE};
pub use config::CacheSettings;
pub use error::{CacheError, CacheResult};
pub use expiry::{CacheAge, DEFAULT_MAX_AGE_DAYS, ExpiryPolicy, Verdict};
pub use paths::*;
pub use record::{CacheSnapshot, FilmRecord};
