//! Per-letter feedback returned by the guess evaluator
//!
//! Each position of a submitted guess is classified as:
//! - `Correct`: the letter is in the word at this position
//! - `Present`: the letter is in the word, but elsewhere
//! - `Absent`: the letter is not in the word
//!
//! On the wire the statuses are lowercase strings (`"correct"`, `"present"`,
//! `"absent"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// How much a status tells about a letter
    ///
    /// Used to keep the best known status per letter for the on-screen
    /// keyboard: `Correct` beats `Present` beats `Absent`.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }

    /// Emoji tile for share text ("🟩", "🟨", "⬜")
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
