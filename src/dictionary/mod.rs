//! Dictionary of valid words
//!
//! An ordered, read-only list of lowercase words with exact-match lookup.
//! The default list is embedded in the binary; a custom list can be loaded
//! from a file with [`loader::load_or_empty`].

mod embedded;
pub mod loader;

use crate::core::LetterFrequencies;
use rustc_hash::FxHashSet;

pub use embedded::{ENGLISH, ENGLISH_COUNT};
pub use loader::DictionaryError;

/// The set of words a player may score
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, lowercasing words and dropping blanks and repeats
    ///
    /// File order is kept; the first occurrence of a repeated word wins.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && dictionary.index.insert(word.clone()) {
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    /// A dictionary that accepts nothing
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ENGLISH.iter().copied())
    }

    /// Exact-match lookup; the candidate is lowercased first
    ///
    /// # Examples
    /// ```
    /// use grid_boggle::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["cat", "dog"]);
    /// assert!(dictionary.is_valid_word("CAT"));
    /// assert!(!dictionary.is_valid_word("ca"));
    /// ```
    #[must_use]
    pub fn is_valid_word(&self, candidate: &str) -> bool {
        self.index.contains(&candidate.to_lowercase())
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letter counts over every word, used to weight grid generation
    #[must_use]
    pub fn letter_frequencies(&self) -> LetterFrequencies {
        LetterFrequencies::from_words(&self.words)
    }
}
