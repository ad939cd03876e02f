//! Grid Boggle
//!
//! A timed single-player word game on a 3×3 letter grid. Spell words by
//! chaining adjacent tiles; each letter of an accepted word is worth 100 points.
//!
//! # Quick Start
//!
//! ```rust
//! use grid_boggle::core::Grid;
//! use grid_boggle::dictionary::Dictionary;
//! use grid_boggle::game::{Round, Verdict};
//!
//! let dictionary = Dictionary::new(["cat", "rent"]);
//! let grid: Grid = "CATSEPRNT".parse().unwrap();
//! let mut round = Round::new(&dictionary, grid.clone(), 90);
//!
//! for pos in grid.trace("cat").unwrap() {
//!     round.press(pos);
//! }
//! assert_eq!(
//!     round.commit(),
//!     Some(Verdict::Accepted { word: "CAT".to_string(), points: 300 })
//! );
//! ```

// Core domain types
pub mod core;

// Word lists and validation
pub mod dictionary;

// Rounds, scoring, timer and session stats
pub mod game;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
