//! The grid of guess rows and the active-row cursor
//!
//! Rows above the cursor are resolved, the row at the cursor is the only one
//! that may change, and rows below it are empty. The cursor never moves
//! backwards and stops at the last row.

use super::{GameConfig, LetterStatus, Row};

/// Fixed-size grid of `max_guesses` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    rows: Vec<Row>,
    active: usize,
}

impl Board {
    /// Fresh board: every row empty, cursor on the first row
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rows: vec![Row::new(); config.max_guesses()],
            active: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the active row (0-based)
    #[inline]
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn active_row(&self) -> &Row {
        &self.rows[self.active]
    }

    #[inline]
    pub(crate) fn active_row_mut(&mut self) -> &mut Row {
        &mut self.rows[self.active]
    }

    /// Number of rows that have been evaluated
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.rows.iter().take_while(|r| r.is_resolved()).count()
    }

    /// Write statuses into the active row and move the cursor down
    ///
    /// The cursor is clamped to the last row.
    pub(crate) fn resolve_active(&mut self, statuses: Vec<LetterStatus>) {
        self.rows[self.active].resolve(statuses);
        self.active = (self.active + 1).min(self.config.max_guesses() - 1);
    }

    /// Check the row/cursor invariants
    ///
    /// - exactly `max_guesses` rows
    /// - rows before the cursor are resolved with full-length letters
    /// - the active row is unresolved, unless it is the last row
    /// - rows after the cursor are empty and unresolved
    /// - no row holds more than `word_len` letters
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let word_len = self.config.word_len();
        let last = self.config.max_guesses() - 1;

        if self.rows.len() != self.config.max_guesses() || self.active > last {
            return false;
        }

        self.rows.iter().enumerate().all(|(i, row)| {
            let resolved_ok = row
                .statuses()
                .is_none_or(|s| s.len() == word_len && row.len() == word_len);
            let position_ok = match i.cmp(&self.active) {
                std::cmp::Ordering::Less => row.is_resolved(),
                std::cmp::Ordering::Equal => !row.is_resolved() || i == last,
                std::cmp::Ordering::Greater => row.is_empty() && !row.is_resolved(),
            };
            row.len() <= word_len && resolved_ok && position_ok
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct};

    fn fill_active(board: &mut Board, word: &str) {
        for ch in word.chars() {
            board.active_row_mut().push(ch);
        }
    }

    #[test]
    fn board_new_is_empty() {
        let board = Board::new(GameConfig::default());
        assert_eq!(board.rows().len(), 6);
        assert_eq!(board.active_index(), 0);
        assert_eq!(board.resolved_count(), 0);
        assert!(board.rows().iter().all(Row::is_empty));
        assert!(board.is_consistent());
    }

    #[test]
    fn board_resolve_advances_cursor() {
        let mut board = Board::new(GameConfig::default());
        fill_active(&mut board, "CRANE");
        board.resolve_active(vec![Correct, Absent, Absent, Absent, Absent]);

        assert_eq!(board.active_index(), 1);
        assert_eq!(board.resolved_count(), 1);
        assert!(board.rows()[0].is_resolved());
        assert!(board.is_consistent());
    }

    #[test]
    fn board_cursor_clamps_at_last_row() {
        let config = GameConfig::new(5, 2).unwrap();
        let mut board = Board::new(config);

        fill_active(&mut board, "CRANE");
        board.resolve_active(vec![Absent; 5]);
        assert_eq!(board.active_index(), 1);

        fill_active(&mut board, "SLATE");
        board.resolve_active(vec![Absent; 5]);
        assert_eq!(board.active_index(), 1);
        assert_eq!(board.resolved_count(), 2);
        assert!(board.is_consistent());
    }

    #[test]
    fn board_inconsistent_when_future_row_has_letters() {
        let mut board = Board::new(GameConfig::default());
        board.rows[3].push('A');
        assert!(!board.is_consistent());
    }

    #[test]
    fn board_inconsistent_when_row_overfilled() {
        let mut board = Board::new(GameConfig::default());
        fill_active(&mut board, "CRANES");
        assert!(!board.is_consistent());
    }
}
