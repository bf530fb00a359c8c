//! Terminal output for the CLI.
//!
//! Human-readable messages are suppressed in `--json` mode, where only the
//! command's JSON document is written to stdout.

use std::time::Duration;

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use storefront_commerce::catalog::LoadStatus;

/// Fallback when stdout is not a terminal.
const DEFAULT_WIDTH: usize = 100;

/// Writes CLI messages in text or JSON mode.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn text(&self, line: impl std::fmt::Display) {
        if !self.json {
            println!("{}", line);
        }
    }

    /// Plain line.
    pub fn line(&self, msg: &str) {
        self.text(msg);
    }

    pub fn info(&self, msg: &str) {
        self.text(format_args!("{} {}", style("ℹ").blue(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.text(format_args!("{} {}", style("✓").green(), msg));
    }

    pub fn header(&self, msg: &str) {
        self.text(format_args!("\n{}", style(msg).bold().underlined()));
    }

    /// Indented `key: value` pair.
    pub fn kv(&self, key: &str, value: &str) {
        self.text(format_args!("  {}: {}", style(key).dim(), value));
    }

    /// Bulleted line.
    pub fn list_item(&self, item: &str) {
        self.text(format_args!("  {} {}", style("•").dim(), item));
    }

    /// Row of left-aligned, fixed-width columns.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:<width$}", col, width = *width))
            .collect();
        self.text(format_args!("  {}", row.join("  ")));
    }

    /// Warnings go to stderr.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors go to stderr; in JSON mode as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Shown with `--verbose` only.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    /// Pretty-printed JSON document on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }

    /// Spinner while the catalog request is in flight. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Width of the terminal in columns.
    pub fn term_width(&self) -> usize {
        self.term
            .size_checked()
            .map_or(DEFAULT_WIDTH, |(_, cols)| usize::from(cols))
    }
}

/// Colored load status.
pub fn status_badge(status: LoadStatus) -> String {
    let label = style(status.as_str());
    match status {
        LoadStatus::Succeeded => label.green(),
        LoadStatus::Loading => label.yellow(),
        LoadStatus::Failed => label.red(),
        LoadStatus::Idle => label.dim(),
    }
    .to_string()
}

/// Shorten text to at most `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
