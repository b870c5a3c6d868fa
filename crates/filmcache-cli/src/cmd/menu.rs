//! Interactive menu - the default entry point
//!
//! One pass per invocation: show the options, read a choice, dispatch, return.

use super::check::check;
use super::clear::clear_confirmed;
use crate::ui::Output;
use crate::ui::prompt::read_answer;
use anyhow::{Context, Result};
use filmcache_core::CacheSettings;
use std::io::{BufRead, Write};

/// Menu entries, numbered as shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1` - check cache status
    Check,
    /// `2` - clear cache after confirmation
    Clear,
    /// `3` - exit
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed menu selection.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Check),
            "2" => Some(Self::Clear),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu<W: Write>(out: &mut Output<W>) {
    out.section("Letterboxd popular films cache manager");
    out.blank();
    out.line("1. Check cache status");
    out.line("2. Clear cache (force fresh scraping)");
    out.line("3. Exit");
    out.blank();
}

/// Show the menu, read one selection from `input` and run it.
pub fn run<R: BufRead, W: Write>(
    settings: &CacheSettings,
    dry_run: bool,
    input: &mut R,
    out: &mut Output<W>,
) -> Result<()> {
    print_menu(out);
    out.prompt("Select option (1-3): ");

    let answer = read_answer(input)
        .context("Failed to read menu selection")?
        .unwrap_or_default();
    tracing::debug!("Menu selection: {answer:?}");

    match MenuChoice::parse(&answer) {
        Some(MenuChoice::Check) => check(settings, false, out),
        Some(MenuChoice::Clear) => clear_confirmed(settings, false, dry_run, input, out),
        Some(MenuChoice::Exit) => {
            out.line("Goodbye!");
            Ok(())
        }
        None => {
            out.error("Invalid option");
            Ok(())
        }
    }
}
