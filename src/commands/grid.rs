//! Grid generation command
//!
//! Generates one grid and reports the letter weights behind it and how many
//! words it holds.

use crate::core::{Grid, GridGenerator, LetterFrequencies};
use crate::dictionary::Dictionary;
use crate::game::{find_words, total_score};
use rand::Rng;

/// Number of consonants listed in the report
const TOP_CONSONANTS: usize = 8;

/// Result of generating a grid
pub struct GridReport {
    pub grid: Grid,
    /// Share of each vowel among all vowels
    pub vowel_weights: Vec<(u8, f64)>,
    /// Most common consonants with their share among all consonants
    pub top_consonants: Vec<(u8, f64)>,
    /// False when the dictionary had no letters and sampling was uniform
    pub weighted: bool,
    pub findable_words: usize,
    pub max_score: u32,
}

fn shares(weights: &[(u8, u64)]) -> Vec<(u8, f64)> {
    let total: u64 = weights.iter().map(|&(_, w)| w).sum();
    weights
        .iter()
        .map(|&(letter, w)| {
            let share = if total == 0 { 0.0 } else { w as f64 / total as f64 };
            (letter, share)
        })
        .collect()
}

/// Generate a grid from the dictionary's letter frequencies
pub fn generate_grid<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> GridReport {
    let frequencies: LetterFrequencies = dictionary.letter_frequencies();
    let generator = GridGenerator::new(&frequencies);
    let grid = generator.generate(rng);

    let mut consonants = shares(&frequencies.consonant_weights());
    consonants.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    consonants.truncate(TOP_CONSONANTS);

    let words = find_words(&grid, dictionary);

    GridReport {
        vowel_weights: shares(&frequencies.vowel_weights()),
        top_consonants: consonants,
        weighted: generator.is_weighted(),
        findable_words: words.len(),
        max_score: total_score(&words),
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_vowel;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_for_embedded_dictionary() {
        let dictionary = Dictionary::embedded();
        let report = generate_grid(&dictionary, &mut StdRng::seed_from_u64(5));

        assert!(report.weighted);
        assert_eq!(report.vowel_weights.len(), 5);
        assert_eq!(report.top_consonants.len(), TOP_CONSONANTS);
        assert!(is_vowel(report.grid.center() as u8));

        let vowel_total: f64 = report.vowel_weights.iter().map(|&(_, s)| s).sum();
        assert!((vowel_total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn top_consonants_sorted_descending() {
        let dictionary = Dictionary::embedded();
        let report = generate_grid(&dictionary, &mut StdRng::seed_from_u64(5));
        for pair in report.top_consonants.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn report_for_empty_dictionary() {
        let report = generate_grid(&Dictionary::empty(), &mut StdRng::seed_from_u64(5));
        assert!(!report.weighted);
        assert_eq!(report.findable_words, 0);
        assert_eq!(report.max_score, 0);
        assert!(report.vowel_weights.iter().all(|&(_, s)| s == 0.0));
    }
}
