/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Accuracy color:
/// \>= 75% → green
/// \>= 40% → yellow
/// otherwise → red
pub fn color_for_accuracy(percent: f64) -> &'static str {
    if percent >= 75.0 {
        GREEN
    } else if percent >= 40.0 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out empty labels (rows with no category still get their own group).
pub fn colorize_label(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}(none){RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
