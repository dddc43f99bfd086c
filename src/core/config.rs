//! Board dimensions
//!
//! Word length and guess count are fixed when a session is created.

use derive_more::{Display, Error};

/// Letters per guess
pub const WORD_LEN: usize = 5;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;

/// Error type for invalid board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("Word length must be at least 1")]
    ZeroWordLength,
    #[display("At least one guess must be allowed")]
    ZeroGuesses,
}

/// Board dimensions for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_len: usize,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a config with custom dimensions
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use word_sprint::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 8).unwrap();
    /// assert_eq!(config.word_len(), 4);
    /// assert!(GameConfig::new(0, 6).is_err());
    /// ```
    pub const fn new(word_len: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if word_len == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }
        Ok(Self {
            word_len,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_len(self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_len: WORD_LEN,
            max_guesses: MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.word_len(), 5);
        assert_eq!(config.max_guesses(), 6);
    }

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroGuesses));
        assert!(GameConfig::new(1, 1).is_ok());
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::ZeroGuesses.to_string(),
            "At least one guess must be allowed"
        );
    }
}
