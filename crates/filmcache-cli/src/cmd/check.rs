//! Check command - report cache age and contents

use crate::ui::Output;
use crate::ui::status::render_report;
use anyhow::{Context, Result};
use filmcache_core::{CacheError, CacheReport, CacheSettings};
use std::io::Write;

/// Inspect the cache and print its status.
///
/// Cache errors are reported, never returned; only a failure to encode JSON
/// output is an error here.
pub fn check<W: Write>(settings: &CacheSettings, json: bool, out: &mut Output<W>) -> Result<()> {
    let result = settings
        .cache_file()
        .inspect(settings.policy(), settings.sample_size);

    if json {
        let text = to_json(&result).context("Failed to encode cache status")?;
        out.line(&text);
        return Ok(());
    }

    match result {
        Ok(report) => render_report(out, &report),
        Err(e) if e.is_not_found() => {
            out.info(&format!("No cache file found at {}", e.path().display()));
        }
        Err(e) => {
            tracing::warn!("Cache check failed: {e}");
            out.error(&format!("Error reading cache: {e}"));
        }
    }
    Ok(())
}

fn to_json(result: &Result<CacheReport, CacheError>) -> serde_json::Result<String> {
    match result {
        Ok(report) => serde_json::to_string_pretty(report),
        Err(e) => {
            let status = if e.is_not_found() { "missing" } else { "error" };
            serde_json::to_string_pretty(&serde_json::json!({
                "status": status,
                "kind": e.kind(),
                "message": e.to_string(),
                "path": e.path(),
            }))
        }
    }
}
