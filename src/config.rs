//! Runtime configuration
//!
//! Built from command-line flags in `main` and handed to whichever mode runs.

use crate::dictionary::{Dictionary, loader};
use crate::game::DEFAULT_TIME_LIMIT;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DictionarySource {
    /// The word list compiled into the binary
    #[default]
    Embedded,
    /// A word-list file; failures degrade to an empty dictionary
    File(PathBuf),
}

impl DictionarySource {
    /// Load the dictionary once for the whole session
    #[must_use]
    pub fn load(&self) -> Dictionary {
        match self {
            Self::Embedded => {
                let dictionary = Dictionary::embedded();
                log::info!("using embedded dictionary ({} words)", dictionary.len());
                dictionary
            }
            Self::File(path) => loader::load_or_empty(path),
        }
    }
}

/// Settings shared by every game mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Round length in seconds
    pub time_limit: u32,
    /// Fixed seed for reproducible grids
    pub seed: Option<u64>,
    pub dictionary: DictionarySource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            seed: None,
            dictionary: DictionarySource::default(),
        }
    }
}

impl GameConfig {
    /// Random source for grid generation: seeded if a seed was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.time_limit, 90);
        assert_eq!(config.seed, None);
        assert_eq!(config.dictionary, DictionarySource::Embedded);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_source_loads_empty() {
        let source = DictionarySource::File(PathBuf::from("/no/such/words.txt"));
        assert!(source.load().is_empty());
    }

    #[test]
    fn embedded_source_loads_words() {
        assert!(!DictionarySource::Embedded.load().is_empty());
    }
}
