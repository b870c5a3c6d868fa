//! Shell completion scripts

use clap::CommandFactory;
use std::io::Write;

/// Write the completion script for `shell` to `out`.
///
/// The binary name comes from the clap definition so the script always
/// completes the same command `--help` describes.
pub fn completions<W: Write>(shell: clap_complete::Shell, out: &mut W) {
    let mut command = crate::Cli::command();
    let bin_name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, bin_name, out);
}
