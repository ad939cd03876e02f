//! Every dictionary word a grid can spell
//!
//! Each word is traced independently on the grid, so the dictionary scan runs
//! in parallel.

use super::scoring::{MAX_WORD_LEN, MIN_WORD_LEN, score_word};
use crate::core::Grid;
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Find all scoring dictionary words traceable on `grid`, in dictionary order
///
/// # Examples
/// ```
/// use grid_boggle::core::Grid;
/// use grid_boggle::dictionary::Dictionary;
/// use grid_boggle::game::find_words;
///
/// let grid: Grid = "CATSEPRNT".parse().unwrap();
/// let dictionary = Dictionary::new(["cat", "dog", "rent"]);
/// assert_eq!(find_words(&grid, &dictionary), vec!["cat", "rent"]);
/// ```
#[must_use]
pub fn find_words<'d>(grid: &Grid, dictionary: &'d Dictionary) -> Vec<&'d str> {
    dictionary
        .words()
        .par_iter()
        .filter(|word| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()))
        .filter(|word| grid.trace(word).is_some())
        .map(String::as_str)
        .collect()
}

/// Score for finding every word in `words`
#[must_use]
pub fn total_score(words: &[&str]) -> u32 {
    words.iter().map(|w| score_word(w)).sum()
}

/// Words from `possible` the player did not find, uppercase
#[must_use]
pub fn missed_words(possible: &[&str], found: &[String]) -> Vec<String> {
    possible
        .iter()
        .map(|w| w.to_uppercase())
        .filter(|w| !found.iter().any(|f| f.eq_ignore_ascii_case(w)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // C A T
    // S E P
    // R N T
    fn grid() -> Grid {
        "CATSEPRNT".parse().unwrap()
    }

    #[test]
    fn finds_traceable_words_only() {
        let dictionary = Dictionary::new(["cat", "rent", "tent", "sept", "step", "cab"]);
        assert_eq!(find_words(&grid(), &dictionary), vec!["cat", "rent", "tent", "sept"]);
    }

    #[test]
    fn skips_short_words() {
        let dictionary = Dictionary::new(["at", "ca", "cat"]);
        assert_eq!(find_words(&grid(), &dictionary), vec!["cat"]);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        assert!(find_words(&grid(), &Dictionary::empty()).is_empty());
    }

    #[test]
    fn every_found_word_traces() {
        let dictionary = Dictionary::embedded();
        let grid = grid();
        for word in find_words(&grid, &dictionary) {
            assert!(dictionary.is_valid_word(word));
            assert!(grid.trace(word).is_some(), "{word} does not trace");
        }
    }

    #[test]
    fn total_score_sums_words() {
        assert_eq!(total_score(&["cat", "rent"]), 700);
        assert_eq!(total_score(&[]), 0);
    }

    #[test]
    fn missed_words_ignores_case() {
        let missed = missed_words(&["cat", "rent", "tent"], &["RENT".to_string()]);
        assert_eq!(missed, vec!["CAT", "TENT"]);
    }
}
