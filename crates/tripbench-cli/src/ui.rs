//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled section header, preceded by a blank line.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("\n=== {text} ===");
    } else {
        println!("\n{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
