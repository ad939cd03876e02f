//! The 3×3 letter grid and its adjacency table
//!
//! Tiles are addressed either by `Position { row, col }` or by a flat row-major
//! index `0..9`. Adjacency is 8-directional and clipped at the grid edges; the
//! table is computed once at compile time as one neighbour bitmask per tile.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side length of the grid
pub const GRID_SIZE: usize = 3;

/// Number of tiles on the grid
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Flat index of the centre tile, which always holds the vowel
pub const VOWEL_INDEX: usize = 4;

/// Neighbour bitmask for each flat tile index (bit `j` set = tile `j` is adjacent)
pub const ADJACENCY: [u16; TILE_COUNT] = build_adjacency();

const fn build_adjacency() -> [u16; TILE_COUNT] {
    let mut table = [0u16; TILE_COUNT];
    let mut i = 0;
    while i < TILE_COUNT {
        let (row, col) = ((i / GRID_SIZE) as isize, (i % GRID_SIZE) as isize);
        let mut j = 0;
        while j < TILE_COUNT {
            let (other_row, other_col) = ((j / GRID_SIZE) as isize, (j % GRID_SIZE) as isize);
            let dr = row - other_row;
            let dc = col - other_col;
            if j != i && dr >= -1 && dr <= 1 && dc >= -1 && dc <= 1 {
                table[i] |= 1 << j;
            }
            j += 1;
        }
        i += 1;
    }
    table
}

/// A tile coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

/// Error type for tile coordinates that cannot be parsed or are off the grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("tile ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("cannot read '{0}' as a tile (use a1..c3 or 1..9)")]
    Unreadable(String),
}

impl Position {
    /// The centre tile
    pub const CENTER: Self = Self { row: 1, col: 1 };

    /// Create a position from a zero-based row and column
    ///
    /// # Errors
    /// Returns `PositionError::OutOfBounds` if either coordinate is not in `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self, PositionError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PositionError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Create a position from a flat row-major index (`0..9`)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= TILE_COUNT {
            return None;
        }
        Some(Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Flat row-major index of this tile
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    #[inline]
    pub(crate) const fn bit(self) -> u16 {
        1 << self.index()
    }

    /// Whether `other` touches this tile horizontally, vertically or diagonally
    ///
    /// A tile is never adjacent to itself.
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        ADJACENCY[self.index()] & other.bit() != 0
    }

    /// All tiles adjacent to this one, in row-major order
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        let mask = ADJACENCY[self.index()];
        (0..TILE_COUNT)
            .filter(move |&i| mask & (1 << i) != 0)
            .filter_map(Self::from_index)
    }

    /// Every tile on the grid, in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TILE_COUNT).filter_map(Self::from_index)
    }

    /// Move by a row/column offset, staying on the grid
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// Human label such as `a1` (row letter, column number)
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", char::from(b'a' + self.row), self.col + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Accepts `a1`..`c3` (row letter, column digit) or a reading-order digit `1`..`9`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unreadable = || PositionError::Unreadable(s.to_string());
        let bytes = s.trim().as_bytes();
        match bytes {
            [digit @ b'1'..=b'9'] => Self::from_index(usize::from(digit - b'1')).ok_or_else(unreadable),
            [row, col] => {
                let row = row.to_ascii_lowercase();
                if !row.is_ascii_lowercase() || !col.is_ascii_digit() || *col == b'0' {
                    return Err(unreadable());
                }
                Self::new(usize::from(row - b'a'), usize::from(col - b'1'))
            }
            _ => Err(unreadable()),
        }
    }
}

/// Error type for grid literals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("a grid needs exactly 9 letters, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// A 3×3 grid of uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: [u8; TILE_COUNT],
}

impl Grid {
    /// Build a grid from nine letters in row-major order
    ///
    /// Letters are normalised to uppercase.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` for any non-ASCII-alphabetic byte.
    pub fn from_letters(letters: [u8; TILE_COUNT]) -> Result<Self, GridError> {
        if let Some(&bad) = letters.iter().find(|b| !b.is_ascii_alphabetic()) {
            return Err(GridError::InvalidLetter(char::from(bad)));
        }
        Ok(Self {
            tiles: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Build a grid from letters already known to be ASCII alphabetic
    pub(crate) fn from_valid_letters(letters: [u8; TILE_COUNT]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_alphabetic));
        Self {
            tiles: letters.map(|b| b.to_ascii_uppercase()),
        }
    }

    /// Letter on the given tile
    #[inline]
    #[must_use]
    pub const fn letter(&self, pos: Position) -> char {
        self.tiles[pos.index()] as char
    }

    /// All nine letters in row-major order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }

    /// Iterate rows of three letters, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(GRID_SIZE)
    }

    /// The centre letter
    #[must_use]
    pub const fn center(&self) -> char {
        self.tiles[VOWEL_INDEX] as char
    }

    /// Find a path of distinct, pairwise-adjacent tiles spelling `word`
    ///
    /// Matching is case-insensitive. Returns `None` if the word cannot be traced.
    ///
    /// # Examples
    /// ```
    /// use grid_boggle::core::Grid;
    ///
    /// let grid: Grid = "CATSEPRNT".parse().unwrap();
    /// assert!(grid.trace("cat").is_some());
    /// assert!(grid.trace("cab").is_none());
    /// ```
    #[must_use]
    pub fn trace(&self, word: &str) -> Option<Vec<Position>> {
        let target: Vec<u8> = word.bytes().map(|b| b.to_ascii_uppercase()).collect();
        if target.is_empty() || target.len() > TILE_COUNT {
            return None;
        }

        let mut path = Vec::with_capacity(target.len());
        for start in Position::all() {
            if self.extend_path(&target, start, 0, &mut path) {
                return Some(path);
            }
        }
        None
    }

    fn extend_path(&self, target: &[u8], pos: Position, used: u16, path: &mut Vec<Position>) -> bool {
        if self.tiles[pos.index()] != target[path.len()] {
            return false;
        }
        path.push(pos);
        if path.len() == target.len() {
            return true;
        }

        let used = used | pos.bit();
        for next in pos.neighbors() {
            if used & next.bit() == 0 && self.extend_path(target, next, used, path) {
                return true;
            }
        }

        path.pop();
        false
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse nine letters, ignoring whitespace, `/` and `,` separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != ',')
            .collect();

        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GridError::InvalidLetter(bad));
        }

        let bytes: Vec<u8> = letters.iter().map(|&c| c as u8).collect();
        let tiles: [u8; TILE_COUNT] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| GridError::WrongLength(bytes.len()))?;
        Self::from_letters(tiles)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
