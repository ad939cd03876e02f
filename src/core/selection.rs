//! Tile selection for the word being spelled
//!
//! Pressing a free tile next to the last one extends the word; pressing any tile
//! that is already part of the word submits it.

use super::grid::{Grid, Position};

/// What happened when a tile was pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Press {
    /// The tile was added; carries its letter
    Selected(char),
    /// The tile was already selected, so the word was submitted and the selection cleared
    Committed(String),
    /// The tile does not touch the last selected tile; nothing changed
    NotAdjacent,
}

/// The tiles selected so far and the word they spell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    path: Vec<Position>,
    word: String,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Press a tile on `grid`
    ///
    /// # Examples
    /// ```
    /// use grid_boggle::core::{Grid, Position, Press, Selection};
    ///
    /// let grid: Grid = "CATSEPRNT".parse().unwrap();
    /// let mut selection = Selection::new();
    /// for label in ["a1", "a2", "a3"] {
    ///     selection.press(&grid, label.parse().unwrap());
    /// }
    /// assert_eq!(selection.word(), "CAT");
    /// assert_eq!(
    ///     selection.press(&grid, "a3".parse().unwrap()),
    ///     Press::Committed("CAT".to_string())
    /// );
    /// ```
    pub fn press(&mut self, grid: &Grid, pos: Position) -> Press {
        if self.contains(pos) {
            return self
                .commit()
                .map_or(Press::NotAdjacent, Press::Committed);
        }

        match self.last() {
            Some(last) if !last.is_adjacent(pos) => Press::NotAdjacent,
            _ => {
                let letter = grid.letter(pos);
                self.path.push(pos);
                self.word.push(letter);
                Press::Selected(letter)
            }
        }
    }

    /// Submit the current word and clear the selection
    ///
    /// Returns `None` if nothing was selected.
    pub fn commit(&mut self) -> Option<String> {
        if self.path.is_empty() {
            return None;
        }
        self.path.clear();
        Some(std::mem::take(&mut self.word))
    }

    /// Drop the current word without submitting it
    pub fn discard(&mut self) {
        self.path.clear();
        self.word.clear();
    }

    /// Remove the most recently selected tile
    pub fn undo(&mut self) -> Option<Position> {
        let pos = self.path.pop()?;
        self.word.pop();
        Some(pos)
    }

    /// The word spelled so far (uppercase)
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Selected tiles in selection order
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.path.last().copied()
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.path.contains(&pos)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // C A T
    // S E P
    // R N T
    fn grid() -> Grid {
        "CATSEPRNT".parse().unwrap()
    }

    fn at(label: &str) -> Position {
        label.parse().unwrap()
    }

    #[test]
    fn first_tile_can_be_anywhere() {
        let mut selection = Selection::new();
        assert_eq!(selection.press(&grid(), at("c3")), Press::Selected('T'));
        assert_eq!(selection.word(), "T");
    }

    #[test]
    fn next_tile_must_be_adjacent() {
        let grid = grid();
        let mut selection = Selection::new();
        selection.press(&grid, at("a1"));

        assert_eq!(selection.press(&grid, at("c3")), Press::NotAdjacent);
        assert_eq!(selection.word(), "C");
        assert_eq!(selection.press(&grid, at("b2")), Press::Selected('E'));
        assert_eq!(selection.word(), "CE");
    }

    #[test]
    fn adjacency_checked_against_last_tile_only() {
        let grid = grid();
        let mut selection = Selection::new();
        selection.press(&grid, at("a1"));
        selection.press(&grid, at("b2"));
        // c3 is not next to a1 but is next to b2
        assert_eq!(selection.press(&grid, at("c3")), Press::Selected('T'));
    }

    #[test]
    fn pressing_selected_tile_commits() {
        let grid = grid();
        let mut selection = Selection::new();
        selection.press(&grid, at("c1"));
        selection.press(&grid, at("b2"));
        selection.press(&grid, at("c2"));
        selection.press(&grid, at("c3"));

        assert_eq!(
            selection.press(&grid, at("b2")),
            Press::Committed("RENT".to_string())
        );
        assert!(selection.is_empty());
        assert_eq!(selection.word(), "");
    }

    #[test]
    fn commit_empty_is_none() {
        let mut selection = Selection::new();
        assert_eq!(selection.commit(), None);
    }

    #[test]
    fn discard_clears_everything() {
        let grid = grid();
        let mut selection = Selection::new();
        selection.press(&grid, at("a1"));
        selection.press(&grid, at("a2"));
        selection.discard();

        assert!(selection.is_empty());
        assert_eq!(selection.last(), None);
        // After a discard any tile may start a word again
        assert_eq!(selection.press(&grid, at("c3")), Press::Selected('T'));
    }

    #[test]
    fn undo_removes_last_letter() {
        let grid = grid();
        let mut selection = Selection::new();
        selection.press(&grid, at("a1"));
        selection.press(&grid, at("a2"));

        assert_eq!(selection.undo(), Some(at("a2")));
        assert_eq!(selection.word(), "C");
        assert_eq!(selection.path(), &[at("a1")]);
    }
}
