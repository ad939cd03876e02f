//! Letter frequency tables
//!
//! Counts how often each letter `a`..`z` occurs across a word list. The grid
//! generator draws consonants and the vowel from these counts.

/// The alphabet in table order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// The letters treated as vowels (`y` is a consonant here)
pub const VOWELS: &[u8; 5] = b"aeiou";

/// Check whether a letter is a vowel (case-insensitive)
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter.to_ascii_lowercase())
}

/// Occurrence count of every letter across a word list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterFrequencies {
    counts: [u64; 26],
}

impl LetterFrequencies {
    /// Count letters over a collection of words
    ///
    /// Only ASCII letters are counted; everything else is ignored.
    ///
    /// # Examples
    /// ```
    /// use grid_boggle::core::LetterFrequencies;
    ///
    /// let freq = LetterFrequencies::from_words(["cat", "act"]);
    /// assert_eq!(freq.count(b'a'), 2);
    /// assert_eq!(freq.total(), 6);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = [0u64; 26];
        for word in words {
            for byte in word.as_ref().bytes() {
                let lower = byte.to_ascii_lowercase();
                if lower.is_ascii_lowercase() {
                    counts[usize::from(lower - b'a')] += 1;
                }
            }
        }
        Self { counts }
    }

    /// Number of occurrences of `letter` (case-insensitive)
    #[must_use]
    pub fn count(&self, letter: u8) -> u64 {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.counts[usize::from(lower - b'a')]
        } else {
            0
        }
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Relative frequency of `letter` in `[0, 1]`; zero when nothing was counted
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(letter) as f64 / total as f64
        }
    }

    /// The 21 consonants with their counts, alphabetical
    #[must_use]
    pub fn consonant_weights(&self) -> Vec<(u8, u64)> {
        ALPHABET
            .iter()
            .filter(|&&letter| !is_vowel(letter))
            .map(|&letter| (letter, self.count(letter)))
            .collect()
    }

    /// The 5 vowels with their counts, alphabetical
    #[must_use]
    pub fn vowel_weights(&self) -> Vec<(u8, u64)> {
        VOWELS
            .iter()
            .map(|&letter| (letter, self.count(letter)))
            .collect()
    }

    /// Letters sorted by descending count, ties alphabetical
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, u64)> {
        let mut ranked: Vec<(u8, u64)> = ALPHABET
            .iter()
            .map(|&letter| (letter, self.count(letter)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}
