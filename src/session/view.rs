//! Read-only projection of the board for renderers

use crate::core::LetterStatus;

/// One tile of the projected grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The typed letter, or `Cell::BLANK`
    pub ch: char,
    /// `None` until the row is resolved
    pub status: Option<LetterStatus>,
}

impl Cell {
    /// Placeholder for positions without a letter
    pub const BLANK: char = ' ';

    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.ch == Self::BLANK
    }
}

/// Every row of the board, each padded to `word_len` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<Vec<Cell>>,
    pub active_row: usize,
}

impl BoardView {
    /// Letters of a row with blanks trimmed
    #[must_use]
    pub fn row_text(&self, index: usize) -> String {
        self.rows
            .get(index)
            .map(|cells| cells.iter().filter(|c| !c.is_blank()).map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
