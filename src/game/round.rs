//! A single timed round
//!
//! Bundles the grid, the player's current selection, the words found so far
//! and the countdown. Both the TUI and the text mode drive rounds through this
//! type.

use super::scoring::{Verdict, judge};
use super::stats::RoundSummary;
use super::timer::{Countdown, Tick};
use crate::core::{Grid, Position, Press, Selection};
use crate::dictionary::Dictionary;

/// What a tile press led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Letter added to the current word
    Selected(char),
    /// Tile is not next to the last selected tile
    NotAdjacent,
    /// A selected tile was pressed, so the word was submitted
    Submitted(Verdict),
    /// The round is over; input is ignored
    Finished,
}

/// State of one round of play
#[derive(Debug, Clone)]
pub struct Round<'a> {
    dictionary: &'a Dictionary,
    grid: Grid,
    selection: Selection,
    found: Vec<String>,
    score: u32,
    countdown: Countdown,
}

impl<'a> Round<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, grid: Grid, time_limit: u32) -> Self {
        log::debug!("new {time_limit}s round on grid {:?}", grid.letters());
        Self {
            dictionary,
            grid,
            selection: Selection::new(),
            found: Vec::new(),
            score: 0,
            countdown: Countdown::new(time_limit),
        }
    }

    /// Press a tile: select it, or submit the word if it is already selected
    pub fn press(&mut self, pos: Position) -> PressOutcome {
        if self.is_over() {
            return PressOutcome::Finished;
        }
        match self.selection.press(&self.grid, pos) {
            Press::Selected(letter) => PressOutcome::Selected(letter),
            Press::NotAdjacent => PressOutcome::NotAdjacent,
            Press::Committed(word) => PressOutcome::Submitted(self.submit(&word)),
        }
    }

    /// Submit the current word
    ///
    /// Returns `None` when nothing is selected or the round is over.
    pub fn commit(&mut self) -> Option<Verdict> {
        if self.is_over() {
            return None;
        }
        let word = self.selection.commit()?;
        Some(self.submit(&word))
    }

    /// Drop the current word without scoring it
    pub fn discard(&mut self) {
        self.selection.discard();
    }

    /// Remove the last selected tile
    pub fn undo(&mut self) -> Option<Position> {
        if self.is_over() {
            return None;
        }
        self.selection.undo()
    }

    fn submit(&mut self, word: &str) -> Verdict {
        let verdict = judge(word, &self.found, self.dictionary);
        if let Verdict::Accepted { word, points } = &verdict {
            self.found.push(word.clone());
            self.score += points;
        }
        log::debug!("submitted {word}: {verdict}");
        verdict
    }

    /// Advance the countdown by one second
    ///
    /// On expiry any half-spelled word is dropped unscored.
    pub fn tick(&mut self) -> Tick {
        let tick = self.countdown.tick();
        if tick == Tick::Expired {
            self.selection.discard();
        }
        tick
    }

    /// End the round now, regardless of time left
    pub fn stop(&mut self) {
        self.countdown.stop();
        self.selection.discard();
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.countdown.is_expired()
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The word being spelled
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.selection.word()
    }

    /// Accepted words in discovery order, uppercase
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Close the round and summarise it
    #[must_use]
    pub fn finish(self) -> RoundSummary {
        RoundSummary {
            score: self.score,
            words: self.found,
            time_limit: self.countdown.limit(),
        }
    }
}
