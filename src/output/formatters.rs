//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::session::Cell;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Tile coloured by its status
#[must_use]
pub fn colored_tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.ch);
    match cell.status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None if cell.is_blank() => " · ".bright_black(),
        None => text.bold(),
    }
}

/// One line of the on-screen keyboard with hint colours
#[must_use]
pub fn keyboard_line(row: &str, hints: &FxHashMap<char, LetterStatus>) -> String {
    row.chars()
        .map(|ch| {
            let key = ch.to_string();
            match hints.get(&ch) {
                Some(LetterStatus::Correct) => key.green().bold().to_string(),
                Some(LetterStatus::Present) => key.yellow().bold().to_string(),
                Some(LetterStatus::Absent) => key.bright_black().to_string(),
                None => key,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// All three keyboard rows
#[must_use]
pub fn keyboard_lines(hints: &FxHashMap<char, LetterStatus>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| keyboard_line(row, hints))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_tile_keeps_letter() {
        colored::control::set_override(false);
        let blank = Cell {
            ch: Cell::BLANK,
            status: None,
        };
        let letter = Cell {
            ch: 'A',
            status: Some(LetterStatus::Correct),
        };
        assert_eq!(colored_tile(&blank).to_string(), " · ");
        assert_eq!(colored_tile(&letter).to_string(), " A ");
    }

    #[test]
    fn keyboard_line_without_hints() {
        colored::control::set_override(false);
        let hints = FxHashMap::default();
        assert_eq!(keyboard_line("ZXCVBNM", &hints), "Z X C V B N M");
    }

    #[test]
    fn keyboard_lines_cover_alphabet() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&FxHashMap::default());
        assert_eq!(lines.len(), 3);
        let letters: usize = lines
            .iter()
            .map(|l| l.chars().filter(char::is_ascii_alphabetic).count())
            .sum();
        assert_eq!(letters, 26);
    }
}
