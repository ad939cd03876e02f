//! Grid solutions command
//!
//! Lists every dictionary word that can be spelled on a grid.

use crate::core::Grid;
use crate::dictionary::Dictionary;
use crate::game::{find_words, total_score};

/// Every word on a grid
pub struct SolutionsResult {
    pub grid: Grid,
    /// Uppercase, longest first, then alphabetical
    pub words: Vec<String>,
    pub max_score: u32,
}

impl SolutionsResult {
    /// Word counts per length, shortest first
    #[must_use]
    pub fn counts_by_length(&self) -> Vec<(usize, usize)> {
        let mut counts: Vec<(usize, usize)> = Vec::new();
        for word in self.words.iter().rev() {
            match counts.last_mut() {
                Some((len, count)) if *len == word.len() => *count += 1,
                _ => counts.push((word.len(), 1)),
            }
        }
        counts
    }
}

/// Find all words on `grid`
#[must_use]
pub fn solve_grid(grid: Grid, dictionary: &Dictionary) -> SolutionsResult {
    let found = find_words(&grid, dictionary);
    let max_score = total_score(&found);

    let mut words: Vec<String> = found.iter().map(|w| w.to_uppercase()).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    SolutionsResult {
        grid,
        words,
        max_score,
    }
}
