//! Formatting utilities for terminal output

use std::fmt::Display;

/// Format a sequence the way it appears in tree labels: `[a, b, c]`
#[must_use]
pub fn format_values<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing the comparison count relative to the naive scan's cost
#[must_use]
pub fn comparison_bar(comparisons: usize, naive: usize, width: usize) -> String {
    if naive == 0 {
        return "░".repeat(width);
    }
    create_progress_bar(comparisons as f64, naive as f64, width)
}
