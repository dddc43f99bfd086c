//! Guess evaluation
//!
//! The session never scores guesses itself. It hands a complete guess to a
//! `GuessEvaluator` and receives one `LetterStatus` per letter, or an error.

mod http;

pub use http::HttpEvaluator;

use crate::core::LetterStatus;
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Toast text used when a failure carries no usable detail
pub const GENERIC_FAILURE: &str = "Guess failed";

/// Why an evaluation did not produce statuses
///
/// The `Display` output is what the player sees in the toast.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvaluateError {
    /// The request never got a response
    #[display("{message}")]
    Transport { message: String },

    /// The evaluator answered with a non-success status
    #[display("{message}")]
    Rejected { status: u16, message: String },

    /// A success response without the expected shape
    #[display("Guess failed")]
    Malformed { reason: String },
}

impl EvaluateError {
    /// Rejection using the response's `detail`, or the generic message
    #[must_use]
    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        Self::Rejected {
            status,
            message: detail.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        }
    }

    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Remote collaborator that scores a complete guess
///
/// Implementations must return exactly one status per letter, aligned with
/// the guess. The session double-checks the length and treats a mismatch as
/// `EvaluateError::Malformed`.
#[async_trait]
pub trait GuessEvaluator: Send + Sync {
    /// Score `guess` (uppercase, `word_len` letters)
    async fn evaluate(&self, guess: &str) -> Result<Vec<LetterStatus>, EvaluateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_uses_detail_when_present() {
        let err = EvaluateError::rejected(400, Some("Guess must be 5 letters A-Z.".into()));
        assert_eq!(err.to_string(), "Guess must be 5 letters A-Z.");
    }

    #[test]
    fn rejected_falls_back_to_generic_message() {
        let err = EvaluateError::rejected(500, None);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
        assert!(matches!(err, EvaluateError::Rejected { status: 500, .. }));
    }

    #[test]
    fn malformed_hides_reason_from_toast() {
        let err = EvaluateError::malformed("missing field `result`");
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn transport_shows_message() {
        let err = EvaluateError::Transport {
            message: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "connection refused");
    }
}
