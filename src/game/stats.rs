//! Round summaries and best-of-session statistics
//!
//! Statistics live only as long as the process and change only when a round
//! ends. Every best is a running maximum, so none of them can go down.

use super::scoring::score_word;

/// What a single round produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    /// Accepted words in discovery order, uppercase
    pub words: Vec<String>,
    pub time_limit: u32,
}

impl RoundSummary {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The longest accepted word; the earliest one wins a tie
    #[must_use]
    pub fn longest_word(&self) -> Option<&str> {
        self.words
            .iter()
            .fold(None, |best: Option<&String>, word| match best {
                Some(b) if b.len() >= word.len() => Some(b),
                _ => Some(word),
            })
            .map(String::as_str)
    }
}

/// Running bests across every round of the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    rounds_played: usize,
    best_word: Option<String>,
    best_score: u32,
    best_word_count: usize,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished round into the session bests
    ///
    /// # Examples
    /// ```
    /// use grid_boggle::game::{RoundSummary, SessionStats};
    ///
    /// let mut stats = SessionStats::new();
    /// stats.record(&RoundSummary {
    ///     score: 700,
    ///     words: vec!["CAT".into(), "RENT".into()],
    ///     time_limit: 60,
    /// });
    /// assert_eq!(stats.best_score(), 700);
    /// assert_eq!(stats.best_word(), Some("RENT"));
    /// assert_eq!(stats.best_word_points(), 400);
    /// ```
    pub fn record(&mut self, summary: &RoundSummary) {
        self.rounds_played += 1;
        self.best_score = self.best_score.max(summary.score);
        self.best_word_count = self.best_word_count.max(summary.word_count());

        if let Some(longest) = summary.longest_word() {
            let longer = self
                .best_word
                .as_ref()
                .is_none_or(|best| longest.len() > best.len());
            if longer {
                self.best_word = Some(longest.to_string());
            }
        }

        log::debug!(
            "round {} recorded: score {}, {} words; bests now {} / {} words",
            self.rounds_played,
            summary.score,
            summary.word_count(),
            self.best_score,
            self.best_word_count
        );
    }

    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Longest word found in any round
    #[must_use]
    pub fn best_word(&self) -> Option<&str> {
        self.best_word.as_deref()
    }

    /// Points earned by the best word (0 if none)
    #[must_use]
    pub fn best_word_points(&self) -> u32 {
        self.best_word.as_deref().map_or(0, score_word)
    }

    /// Highest round score
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Most words found in a single round
    #[must_use]
    pub const fn best_word_count(&self) -> usize {
        self.best_word_count
    }
}
