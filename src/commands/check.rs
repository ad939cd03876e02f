//! Word check command
//!
//! Reports whether a word is in the dictionary, what it would score, and
//! optionally whether it can be spelled on a given grid.

use crate::core::{Grid, Position};
use crate::dictionary::Dictionary;
use crate::game::score_word;

/// Result of checking a word
pub struct CheckResult {
    /// The word, uppercase
    pub word: String,
    pub in_dictionary: bool,
    /// Points the word is worth if accepted
    pub points: u32,
    pub grid: Option<Grid>,
    /// Tiles spelling the word on `grid`, if it can be traced
    pub path: Option<Vec<Position>>,
}

impl CheckResult {
    /// Whether the word would be accepted (and on the grid, when one was given)
    #[must_use]
    pub fn playable(&self) -> bool {
        self.in_dictionary && self.points > 0 && (self.grid.is_none() || self.path.is_some())
    }
}

/// Check a word against the dictionary and, optionally, a grid
///
/// # Errors
///
/// Returns an error if the word is empty or contains anything but ASCII letters.
pub fn check_word(
    word: &str,
    dictionary: &Dictionary,
    grid: Option<&Grid>,
) -> Result<CheckResult, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word is empty".to_string());
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("Word '{word}' must contain only letters"));
    }

    Ok(CheckResult {
        word: word.to_uppercase(),
        in_dictionary: dictionary.is_valid_word(word),
        points: score_word(word),
        grid: grid.cloned(),
        path: grid.and_then(|g| g.trace(word)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(["cat", "dog", "at"])
    }

    #[test]
    fn check_known_word() {
        let result = check_word("Cat", &dictionary(), None).unwrap();
        assert_eq!(result.word, "CAT");
        assert!(result.in_dictionary);
        assert_eq!(result.points, 300);
        assert!(result.playable());
    }

    #[test]
    fn check_short_word_not_playable() {
        let result = check_word("at", &dictionary(), None).unwrap();
        assert!(result.in_dictionary);
        assert_eq!(result.points, 0);
        assert!(!result.playable());
    }

    #[test]
    fn check_against_grid() {
        let grid: Grid = "CATSEPRNT".parse().unwrap();
        let on_grid = check_word("cat", &dictionary(), Some(&grid)).unwrap();
        assert_eq!(on_grid.path.as_ref().map(Vec::len), Some(3));
        assert!(on_grid.playable());

        let off_grid = check_word("dog", &dictionary(), Some(&grid)).unwrap();
        assert!(off_grid.in_dictionary);
        assert_eq!(off_grid.path, None);
        assert!(!off_grid.playable());
    }

    #[test]
    fn check_rejects_non_letters() {
        assert!(check_word("c4t", &dictionary(), None).is_err());
        assert!(check_word("   ", &dictionary(), None).is_err());
    }
}
