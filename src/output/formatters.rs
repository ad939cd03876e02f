//! Formatting utilities for terminal output

use crate::core::{GRID_SIZE, Grid, Position};

/// Format seconds as `m:ss`
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Render the grid with row letters and column numbers
///
/// Selected tiles are wrapped in brackets.
#[must_use]
pub fn grid_lines(grid: &Grid, selected: &[Position]) -> Vec<String> {
    let mut lines = Vec::with_capacity(GRID_SIZE + 1);
    lines.push("     1   2   3".to_string());

    for row in 0..GRID_SIZE {
        let mut line = format!("  {} ", char::from(b'A' + row as u8));
        for col in 0..GRID_SIZE {
            let Ok(pos) = Position::new(row, col) else {
                continue;
            };
            let letter = grid.letter(pos);
            if selected.contains(&pos) {
                line.push_str(&format!("[{letter}] "));
            } else {
                line.push_str(&format!(" {letter}  "));
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Join words with commas, or `None` for an empty list
#[must_use]
pub fn join_words(words: &[String]) -> String {
    if words.is_empty() {
        "None".to_string()
    } else {
        words.join(", ")
    }
}

/// Format letter weights as percentages, e.g. `E 12.3%`
#[must_use]
pub fn format_weights(weights: &[(u8, f64)]) -> String {
    weights
        .iter()
        .map(|&(letter, share)| {
            format!(
                "{} {:.1}%",
                char::from(letter.to_ascii_uppercase()),
                share * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}
