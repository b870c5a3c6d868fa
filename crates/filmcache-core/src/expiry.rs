//! Cache age and the expiry threshold

use serde::Serialize;
use std::fmt;
use std::time::SystemTime;

/// Seconds in a day, used to turn file age into fractional days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Threshold after which the pipeline treats the cache as stale.
pub const DEFAULT_MAX_AGE_DAYS: f64 = 7.0;

/// Age of the cache file in fractional days.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CacheAge(f64);

impl CacheAge {
    /// Age of a file modified at `modified`, seen from `now`.
    ///
    /// A modification time in the future (clock skew, copied files) yields a
    /// negative age, so the cache stays valid for longer than the threshold.
    pub fn between(modified: SystemTime, now: SystemTime) -> Self {
        let secs = match now.duration_since(modified) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(ahead) => -ahead.duration().as_secs_f64(),
        };
        Self(secs / SECONDS_PER_DAY)
    }

    /// Age from a day count.
    pub fn from_days(days: f64) -> Self {
        Self(days)
    }

    /// Age in days.
    pub fn days(self) -> f64 {
        self.0
    }
}

/// Freshness verdict for a cache file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Younger than the threshold.
    Valid,
    /// At or past the threshold.
    Expired,
}

impl Verdict {
    /// Uppercase label as shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expiry threshold in days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpiryPolicy {
    max_age_days: f64,
}

impl ExpiryPolicy {
    /// Policy with a custom threshold.
    pub fn new(max_age_days: f64) -> Self {
        Self { max_age_days }
    }

    /// Threshold in days.
    pub fn max_age_days(self) -> f64 {
        self.max_age_days
    }

    /// `Valid` strictly below the threshold, `Expired` otherwise.
    pub fn verdict(self, age: CacheAge) -> Verdict {
        if age.days() < self.max_age_days {
            Verdict::Valid
        } else {
            Verdict::Expired
        }
    }

    /// Days left before expiry; negative once expired.
    pub fn remaining_days(self, age: CacheAge) -> f64 {
        self.max_age_days - age.days()
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE_DAYS)
    }
}
