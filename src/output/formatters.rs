//! Formatting utilities for terminal output

use crate::core::Jumble;

/// Upper-case the jumble and space its letters out for display
///
/// Separators between word groups become a wider gap.
#[must_use]
pub fn spaced_jumble(jumble: &Jumble) -> String {
    jumble
        .as_str()
        .chars()
        .map(|c| {
            if c.is_alphabetic() {
                c.to_uppercase().collect::<String>()
            } else {
                " ".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress through the puzzle, e.g. `[██████░░░░░░] 1/2`
#[must_use]
pub fn progress_line(found: usize, target: usize, width: usize) -> String {
    format!("[{}] {found}/{target}", create_progress_bar(found, target, width))
}
