//! Unified UI output interface.
//!
//! Commands never call `println!` directly; they go through [`Output`] so the
//! same rendering can target stdout or an in-memory buffer in tests. Output is
//! written sequentially on the calling thread.
//!
//! Individual print calls do not return errors. The first write failure is
//! kept and surfaced by [`Output::flush`], which the binary calls last.

use super::theme::Theme;
use crossterm::style::Stylize;
use std::io::{self, Stdout, Write};

/// Console writer with themed status lines.
#[derive(Debug)]
pub struct Output<W: Write = Stdout> {
    writer: W,
    theme: Theme,
    error: Option<io::Error>,
}

impl Output<Stdout> {
    /// Output handle writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Output<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Output<W> {
    /// Output handle writing to an arbitrary sink.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            theme: Theme::default(),
            error: None,
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = result {
            tracing::debug!("Output write failed: {e}");
            self.error = Some(e);
        }
    }

    /// Consume the handle and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Print a plain line.
    pub fn line(&mut self, text: &str) {
        let result = writeln!(self.writer, "{text}");
        self.record(result);
    }

    /// Print an empty line.
    pub fn blank(&mut self) {
        let result = writeln!(self.writer);
        self.record(result);
    }

    /// Print text without a newline and flush, for prompts.
    pub fn prompt(&mut self, text: &str) {
        let result = write!(self.writer, "{text}").and_then(|()| self.writer.flush());
        self.record(result);
    }

    /// Prints a visual section header.
    pub fn section(&mut self, title: &str) {
        let title = title.with(self.theme.colors.header).bold();
        let result = writeln!(self.writer).and_then(|()| writeln!(self.writer, "{title}"));
        self.record(result);
    }

    /// Prints a `label  value` row aligned on the theme's label column.
    pub fn field(&mut self, label: &str, value: &str) {
        let label = format!("{label:<width$}", width = self.theme.layout.label_width);
        let result = writeln!(
            self.writer,
            "{}{value}",
            label.with(self.theme.colors.secondary)
        );
        self.record(result);
    }

    /// Prints an indented list item.
    pub fn item(&mut self, text: &str) {
        let result = writeln!(
            self.writer,
            "{:indent$}{} {text}",
            "",
            self.theme.icons.bullet,
            indent = self.theme.layout.indent
        );
        self.record(result);
    }

    /// Prints an informational message.
    pub fn info(&mut self, msg: &str) {
        let icon = self.theme.icons.info.with(self.theme.colors.info);
        let result = writeln!(self.writer, "{icon} {msg}");
        self.record(result);
    }

    /// Prints a success message.
    pub fn success(&mut self, msg: &str) {
        let icon = self.theme.icons.success.with(self.theme.colors.success);
        let result = writeln!(self.writer, "{icon} {msg}");
        self.record(result);
    }

    /// Prints a warning message.
    pub fn warning(&mut self, msg: &str) {
        let icon = self.theme.icons.warning.with(self.theme.colors.warning);
        let result = writeln!(self.writer, "{icon} {msg}");
        self.record(result);
    }

    /// Prints an error message.
    pub fn error(&mut self, msg: &str) {
        let icon = self.theme.icons.error.with(self.theme.colors.error);
        let result = writeln!(self.writer, "{icon} {msg}");
        self.record(result);
    }

    /// Flush pending output.
    ///
    /// Returns the first error hit by an earlier write, if any.
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()
    }
}
