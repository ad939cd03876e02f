//! Frequency-weighted grid generation
//!
//! Every grid holds eight consonants and one vowel. Consonants and the vowel are
//! drawn from separate pools weighted by how often each letter appears in the
//! dictionary, and the vowel always lands on the centre tile.

use super::frequency::LetterFrequencies;
use super::grid::{Grid, TILE_COUNT, VOWEL_INDEX};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Number of consonants drawn per grid
pub const CONSONANTS_PER_GRID: usize = TILE_COUNT - 1;

/// A set of letters with a cumulative-weight sampler
///
/// When every weight is zero (an empty dictionary) the pool samples uniformly.
#[derive(Debug, Clone)]
struct LetterPool {
    letters: Vec<u8>,
    weights: Option<WeightedIndex<u64>>,
}

impl LetterPool {
    fn new(weighted: &[(u8, u64)]) -> Self {
        let letters = weighted.iter().map(|&(letter, _)| letter).collect();
        let weights = match WeightedIndex::new(weighted.iter().map(|&(_, weight)| weight)) {
            Ok(dist) => Some(dist),
            Err(err) => {
                log::debug!("letter pool falls back to uniform sampling: {err}");
                None
            }
        };
        Self { letters, weights }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> u8 {
        let index = match &self.weights {
            Some(dist) => dist.sample(rng),
            None => rng.random_range(0..self.letters.len()),
        };
        self.letters[index]
    }

    fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }
}

/// Draws letter grids from dictionary letter frequencies
#[derive(Debug, Clone)]
pub struct GridGenerator {
    consonants: LetterPool,
    vowels: LetterPool,
}

impl GridGenerator {
    /// Build a generator from letter counts
    #[must_use]
    pub fn new(frequencies: &LetterFrequencies) -> Self {
        Self {
            consonants: LetterPool::new(&frequencies.consonant_weights()),
            vowels: LetterPool::new(&frequencies.vowel_weights()),
        }
    }

    /// Whether letters are drawn by frequency (false when the word list had no letters)
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.consonants.is_weighted() && self.vowels.is_weighted()
    }

    /// Generate a grid: four consonants, the vowel, four more consonants, row-major
    ///
    /// # Examples
    /// ```
    /// use grid_boggle::core::{GridGenerator, LetterFrequencies};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let generator = GridGenerator::new(&LetterFrequencies::from_words(["strength"]));
    /// let grid = generator.generate(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(grid.center(), 'E');
    /// ```
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut consonants = [0u8; CONSONANTS_PER_GRID];
        for slot in &mut consonants {
            *slot = self.consonants.sample(rng);
        }
        let vowel = self.vowels.sample(rng);

        let mut letters = [0u8; TILE_COUNT];
        letters[..VOWEL_INDEX].copy_from_slice(&consonants[..VOWEL_INDEX]);
        letters[VOWEL_INDEX] = vowel;
        letters[VOWEL_INDEX + 1..].copy_from_slice(&consonants[VOWEL_INDEX..]);

        // Pools only ever hold a-z
        Grid::from_valid_letters(letters)
    }
}
