//! filmcache - popular films cache manager CLI

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use filmcache_cli::cmd;
use filmcache_cli::ui::Output;
use filmcache_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so menu output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }
    let settings = cli.settings();
    tracing::debug!("Using cache file {}", settings.path.display());

    let mut out = Output::new();
    let mut input = std::io::stdin().lock();

    match cli.command {
        None => cmd::menu::run(&settings, cli.dry_run, &mut input, &mut out)?,
        Some(Commands::Check { json }) => cmd::check::check(&settings, json, &mut out)?,
        Some(Commands::Clear { yes, dry_run }) => {
            cmd::clear::clear_confirmed(&settings, yes, dry_run, &mut input, &mut out)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd::completions::completions(shell, &mut std::io::stdout().lock());
        }
    }

    out.flush().context("Failed to flush output")
}
