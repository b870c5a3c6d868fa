//! Clear command - delete the cache file

use crate::ui::Output;
use crate::ui::prompt::request_confirmation;
use anyhow::{Context, Result};
use filmcache_core::CacheSettings;
use std::io::{BufRead, Write};

/// Question asked before anything is deleted.
pub const CONFIRM_QUESTION: &str = "Are you sure you want to clear the cache?";

/// Delete the cache file without asking.
pub fn clear<W: Write>(settings: &CacheSettings, dry_run: bool, out: &mut Output<W>) -> Result<()> {
    let cache = settings.cache_file();

    if dry_run {
        if cache.exists() {
            out.info(&format!("Would delete {}", cache.path().display()));
        } else {
            out.info("No cache file to clear");
        }
        return Ok(());
    }

    match cache.delete() {
        Ok(()) => {
            out.success("Cache cleared successfully");
            out.line("  Next recommendation run will fetch fresh data from Letterboxd");
        }
        Err(e) if e.is_not_found() => out.info("No cache file to clear"),
        Err(e) => out.error(&format!("Error clearing cache: {e}")),
    }
    Ok(())
}

/// Ask for confirmation unless `yes` is set, then clear.
pub fn clear_confirmed<R: BufRead, W: Write>(
    settings: &CacheSettings,
    yes: bool,
    dry_run: bool,
    input: &mut R,
    out: &mut Output<W>,
) -> Result<()> {
    if !yes {
        out.blank();
        let confirmed = request_confirmation(CONFIRM_QUESTION, input, out)
            .context("Failed to read confirmation")?;
        if !confirmed {
            out.info("Cache not cleared");
            return Ok(());
        }
    }
    clear(settings, dry_run, out)
}
