//! filmcache - popular films cache manager
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Inspects and clears the JSON cache the recommendation pipeline keeps of
//! Letterboxd's popular films.
//!
//! # Usage
//!
//! ```text
//! filmcache                 # interactive menu: check / clear / exit
//! filmcache check [--json]  # print cache status
//! filmcache clear [--yes] [--dry-run]  # delete the cache file
//! ```
//!
//! The cache lives next to the executable as `letterboxd_popular_cache.json`
//! unless `--file` (or `FILMCACHE_FILE`) points elsewhere.

pub mod cmd;
pub mod ui;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use filmcache_core::{CacheSettings, DEFAULT_MAX_AGE_DAYS};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "filmcache")]
#[command(author, version = env!("FILMCACHE_VERSION"), about = "Inspect and clear the popular films cache")]
pub struct Cli {
    /// Cache file location [default: letterboxd_popular_cache.json next to the executable]
    #[arg(long, global = true, env = "FILMCACHE_FILE")]
    pub file: Option<PathBuf>,

    /// Age in days after which the cache counts as expired
    #[arg(
        long,
        global = true,
        env = "FILMCACHE_MAX_AGE_DAYS",
        default_value_t = DEFAULT_MAX_AGE_DAYS,
        value_parser = parse_days
    )]
    pub max_age_days: f64,

    /// Interactive menu only: report what clearing would delete without deleting it
    #[arg(long)]
    pub dry_run: bool,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show cache age, film count and sample titles
    Check {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the cache file so the next run fetches fresh data
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Show what would be deleted without deleting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Reject flag combinations clap cannot express.
    ///
    /// The top-level `--dry-run` only affects the menu; with a subcommand it
    /// would silently do nothing.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.dry_run && self.command.is_some() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "--dry-run before a subcommand has no effect; use `filmcache clear --dry-run`",
            ));
        }
        Ok(())
    }

    /// Settings derived from flags, environment and defaults.
    pub fn settings(&self) -> CacheSettings {
        let settings = CacheSettings::default().with_max_age_days(self.max_age_days);
        match &self.file {
            Some(path) => settings.with_path(path.clone()),
            None => settings,
        }
    }
}

fn parse_days(raw: &str) -> Result<f64, String> {
    let days: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if days.is_finite() && days >= 0.0 {
        Ok(days)
    } else {
        Err(format!("expected a non-negative number of days, got {raw}"))
    }
}
