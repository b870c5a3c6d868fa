//! Cache status rendering

use super::output::Output;
use super::theme::format_days;
use filmcache_core::{CacheReport, Verdict};
use std::io::Write;

/// Render a cache report as a labelled block followed by sample titles.
pub fn render_report<W: Write>(out: &mut Output<W>, report: &CacheReport) {
    let modified = chrono::DateTime::<chrono::Local>::from(report.modified)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    out.section("Popular films cache status");
    out.blank();
    out.field("File:", &report.path.display().to_string());
    out.field("Films:", &format!("{} cached", report.film_count));
    out.field(
        "Age:",
        &format!("{} (modified {modified})", format_days(report.age_days.days())),
    );
    out.field("Expires in:", &format_days(report.remaining_days));
    out.blank();

    match report.verdict {
        Verdict::Valid => out.success("Cache is VALID"),
        Verdict::Expired => out.warning(&format!(
            "Cache is EXPIRED (older than {} days)",
            report.max_age_days
        )),
    }

    if !report.sample_titles.is_empty() {
        out.blank();
        out.line("Sample films:");
        for title in &report.sample_titles {
            out.item(title);
        }
    }
}
