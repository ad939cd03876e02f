//! Core domain types for the letter grid
//!
//! Grid layout, adjacency, letter frequencies, grid generation and tile selection.
//! Nothing here knows about dictionaries, scores or the terminal.

mod frequency;
mod generator;
mod grid;
mod selection;

pub use frequency::{ALPHABET, LetterFrequencies, VOWELS, is_vowel};
pub use generator::{CONSONANTS_PER_GRID, GridGenerator};
pub use grid::{
    ADJACENCY, GRID_SIZE, Grid, GridError, Position, PositionError, TILE_COUNT, VOWEL_INDEX,
};
pub use selection::{Press, Selection};
