//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `42.9%` style percentage with one decimal.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `2 / 3`
pub fn score_fraction(score: usize, total: usize) -> String {
    format!("{} / {}", score, total)
}

/// Word-wrap a paragraph for the terminal; a zero width disables wrapping.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        text.to_string()
    } else {
        textwrap::fill(text, width)
    }
}
