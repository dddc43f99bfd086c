//! Core domain types for the game board
//!
//! Pure data with no I/O: letter statuses, rows, the board grid and its
//! dimensions.

mod board;
mod config;
mod row;
mod status;

pub use board::Board;
pub use config::{ConfigError, GameConfig, MAX_GUESSES, WORD_LEN};
pub use row::Row;
pub use status::LetterStatus;
