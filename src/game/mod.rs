//! Game rules on top of the core grid
//!
//! Scoring, rounds, the countdown, session statistics and the word finder.

pub mod finder;
pub mod round;
pub mod scoring;
pub mod stats;
pub mod timer;

pub use finder::{find_words, missed_words, total_score};
pub use round::{PressOutcome, Round};
pub use scoring::{MAX_WORD_LEN, MIN_WORD_LEN, POINTS_PER_LETTER, Verdict, judge, score_word};
pub use stats::{RoundSummary, SessionStats};
pub use timer::{Countdown, DEFAULT_TIME_LIMIT, TIME_LIMITS, Tick, time_limit_for_choice};
