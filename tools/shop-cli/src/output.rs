//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Where a message line goes.
#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

/// Output handler for CLI messages.
///
/// In JSON mode every human-oriented message is suppressed; only
/// [`Output::json`] and [`Output::error`] write anything.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn emit(&self, stream: Stream, line: impl std::fmt::Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Out => println!("{line}"),
            Stream::Err => eprintln!("{line}"),
        }
    }

    pub fn info(&self, msg: &str) {
        self.emit(Stream::Out, format_args!("{} {msg}", style("ℹ").blue()));
    }

    pub fn success(&self, msg: &str) {
        self.emit(Stream::Out, format_args!("{} {msg}", style("✓").green()));
    }

    pub fn warn(&self, msg: &str) {
        self.emit(Stream::Err, format_args!("{} {msg}", style("⚠").yellow()));
    }

    /// Errors are printed in JSON mode too, as `{"error": "..."}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.emit(Stream::Err, format_args!("{} {}", style("→").dim(), style(msg).dim()));
        }
    }

    pub fn header(&self, msg: &str) {
        self.emit(Stream::Out, format_args!("\n{}", style(msg).bold().underlined()));
    }

    pub fn blank(&self) {
        self.emit(Stream::Out, "");
    }

    /// Pretty-print a value as JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize output"),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.emit(Stream::Out, format_args!("  {}: {value}", style(key).dim()));
    }

    pub fn list_item(&self, item: &str) {
        self.emit(Stream::Out, format_args!("  {} {item}", style("•").dim()));
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        self.emit(Stream::Out, format_args!("  {}", pad_columns(cols, widths)));
    }

    /// A bold header row followed by a rule as wide as the table.
    pub fn table_header(&self, cols: &[&str], widths: &[usize]) {
        let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        self.emit(Stream::Out, format_args!("  {}", style(pad_columns(cols, widths)).bold()));
        self.emit(Stream::Out, format_args!("  {}", style("─".repeat(rule)).dim()));
    }

    /// Spinner shown while a simulated network call is in flight.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn pad_columns(cols: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cols
        .iter()
        .zip(widths)
        .map(|(col, width)| format!("{col:width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Stock badge for product listings.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In Stock").green().to_string()
    } else {
        style("Out of Stock").red().to_string()
    }
}

/// Format a rating out of 5, e.g. "4.5★".
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}★", r),
        None => "-".to_string(),
    }
}

/// Shorten text to `max` characters, adding an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(4.5)), "4.5★");
        assert_eq!(format_rating(Some(4.0)), "4.0★");
        assert_eq!(format_rating(None), "-");
    }

    #[test]
    fn test_pad_columns() {
        assert_eq!(pad_columns(&["1", "Yoga Mat", "$29.99"], &[3, 10, 8]), "1    Yoga Mat    $29.99");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Yoga Mat", 20), "Yoga Mat");
        assert_eq!(truncate("Wireless Headphones", 10), "Wireless …");
    }
}
