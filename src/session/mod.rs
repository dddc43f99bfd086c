//! Game session state machine
//!
//! A `GameSession` owns the board, the `busy` flag and the toast. Every
//! mutation goes through `&mut self`, so there is a single writer by
//! construction. While a submission is outstanding `busy` is set and all
//! input-mutating operations are silent no-ops; nothing is queued.
//!
//! Submissions come in two phases so a UI can keep draining input while the
//! evaluator works:
//!
//! ```text
//! begin_submission() ──► evaluator.evaluate(guess) ──► complete_submission()
//!      busy = true                                        busy = false
//! ```
//!
//! `submit_active_row` runs both phases back to back.

mod input;
mod view;

pub use input::InputEvent;
pub use view::{BoardView, Cell};

use crate::core::{Board, GameConfig, LetterStatus, Row};
use crate::evaluator::{EvaluateError, GuessEvaluator};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Toast shown when submitting a row that is not full
pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";

/// A guess that has been handed off for evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    row: usize,
    guess: String,
}

impl PendingGuess {
    /// Board row the guess was taken from
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }
}

/// What the caller must do after `handle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing further
    None,
    /// Evaluate the guess and pass the result to `complete_submission`
    Evaluate(PendingGuess),
}

/// Game result, inferred from resolved rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won { guesses: usize },
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Client-side state for one game
pub struct GameSession {
    board: Board,
    busy: bool,
    toast: String,
    evaluator: Arc<dyn GuessEvaluator>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("busy", &self.busy)
            .field("toast", &self.toast)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Start a fresh game with the given dimensions
    #[must_use]
    pub fn new(config: GameConfig, evaluator: Arc<dyn GuessEvaluator>) -> Self {
        Self {
            board: Board::new(config),
            busy: false,
            toast: String::new(),
            evaluator,
        }
    }

    /// Start a fresh 5×6 game
    #[must_use]
    pub fn with_defaults(evaluator: Arc<dyn GuessEvaluator>) -> Self {
        Self::new(GameConfig::default(), evaluator)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.board.config()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// True exactly while a submission is outstanding
    #[inline]
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Current toast message; empty when there is nothing to show
    #[inline]
    #[must_use]
    pub fn toast(&self) -> &str {
        &self.toast
    }

    /// Shared handle to the evaluator, for dispatching off the session
    #[must_use]
    pub fn evaluator(&self) -> Arc<dyn GuessEvaluator> {
        Arc::clone(&self.evaluator)
    }

    /// Apply one input event
    ///
    /// Letters append, backspace removes, enter starts a submission. Any
    /// other event is ignored.
    pub fn handle(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Letter(ch) => {
                self.append_letter(ch);
                Action::None
            }
            InputEvent::Backspace => {
                self.remove_last_letter();
                Action::None
            }
            InputEvent::Enter => self
                .begin_submission()
                .map_or(Action::None, Action::Evaluate),
            InputEvent::Other => Action::None,
        }
    }

    /// Append a letter to the active row
    ///
    /// Ignored while busy, for non-letters, on a resolved row, or when the
    /// row is already full.
    pub fn append_letter(&mut self, ch: char) {
        if self.busy || !ch.is_ascii_alphabetic() {
            debug!(?ch, busy = self.busy, "Letter ignored");
            return;
        }

        let word_len = self.config().word_len();
        let row = self.board.active_row_mut();
        if row.is_resolved() || row.len() >= word_len {
            debug!(?ch, "Letter ignored: row closed");
            return;
        }

        row.push(ch.to_ascii_uppercase());
        self.toast.clear();
        debug_assert!(self.board.is_consistent());
    }

    /// Remove the last letter of the active row
    ///
    /// Ignored while busy, on a resolved row, or on an empty row.
    pub fn remove_last_letter(&mut self) {
        if self.busy {
            return;
        }

        let row = self.board.active_row_mut();
        if row.is_resolved() {
            return;
        }

        if row.pop().is_some() {
            self.toast.clear();
        }
        debug_assert!(self.board.is_consistent());
    }

    /// First phase of a submission
    ///
    /// Returns the guess to evaluate and marks the session busy, or `None`
    /// if nothing should be sent. A short row sets the "Not enough letters"
    /// toast without going busy.
    #[instrument(skip(self), fields(row = self.board.active_index()))]
    pub fn begin_submission(&mut self) -> Option<PendingGuess> {
        if self.busy {
            debug!("Submission ignored: already busy");
            return None;
        }

        let row = self.board.active_row();
        if row.is_resolved() {
            debug!("Submission ignored: active row already resolved");
            return None;
        }
        if row.len() != self.config().word_len() {
            self.toast = NOT_ENOUGH_LETTERS.to_string();
            return None;
        }

        let pending = PendingGuess {
            row: self.board.active_index(),
            guess: row.letters().to_string(),
        };
        self.busy = true;
        self.toast.clear();
        info!(guess = %pending.guess, "Submitting guess");
        Some(pending)
    }

    /// Second phase of a submission
    ///
    /// On success the active row is resolved and the cursor advances
    /// (clamped to the last row). On failure the row keeps its letters and
    /// stays editable, and the toast shows the error. A status list of the
    /// wrong length counts as a failure.
    ///
    /// A completion for a different row, or when no submission is
    /// outstanding, is dropped.
    #[instrument(skip_all, fields(row = pending.row, guess = %pending.guess))]
    pub fn complete_submission(
        &mut self,
        pending: PendingGuess,
        result: Result<Vec<LetterStatus>, EvaluateError>,
    ) {
        if !self.busy || pending.row != self.board.active_index() {
            warn!(
                busy = self.busy,
                active = self.board.active_index(),
                "Stale completion ignored"
            );
            return;
        }

        let word_len = self.config().word_len();
        let result = result.and_then(|statuses| {
            if statuses.len() == word_len {
                Ok(statuses)
            } else {
                Err(EvaluateError::malformed(format!(
                    "expected {word_len} statuses, got {}",
                    statuses.len()
                )))
            }
        });

        match result {
            Ok(statuses) => {
                self.board.resolve_active(statuses);
                info!(next_row = self.board.active_index(), "Guess resolved");
            }
            Err(err) => {
                warn!(error = ?err, "Guess evaluation failed");
                self.toast = err.to_string();
            }
        }

        self.busy = false;
        debug_assert!(self.board.is_consistent());
    }

    /// Submit the active row and wait for the evaluator
    ///
    /// Calls the evaluator at most once, and only for a full, unresolved
    /// row while not busy.
    pub async fn submit_active_row(&mut self) {
        let Some(pending) = self.begin_submission() else {
            return;
        };
        let evaluator = self.evaluator();
        let result = evaluator.evaluate(pending.guess()).await;
        self.complete_submission(pending, result);
    }

    /// Project the board into `max_guesses` rows of `word_len` cells
    #[must_use]
    pub fn project_view(&self) -> BoardView {
        let word_len = self.config().word_len();
        let rows = self
            .board
            .rows()
            .iter()
            .map(|row| {
                let mut letters = row.letters().chars();
                (0..word_len)
                    .map(|i| Cell {
                        ch: letters.next().unwrap_or(Cell::BLANK),
                        status: row.statuses().and_then(|s| s.get(i).copied()),
                    })
                    .collect()
            })
            .collect();

        BoardView {
            rows,
            active_row: self.board.active_index(),
        }
    }

    /// Win/loss inferred from resolved rows
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let rows = self.board.rows();
        if let Some(idx) = rows.iter().position(Row::is_solved) {
            Outcome::Won { guesses: idx + 1 }
        } else if rows.iter().all(Row::is_resolved) {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Best known status for each guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterStatus> {
        let mut hints: FxHashMap<char, LetterStatus> = FxHashMap::default();
        for row in self.board.rows() {
            let Some(statuses) = row.statuses() else {
                continue;
            };
            for (ch, &status) in row.letters().chars().zip(statuses) {
                hints
                    .entry(ch)
                    .and_modify(|best| {
                        if status.rank() > best.rank() {
                            *best = status;
                        }
                    })
                    .or_insert(status);
            }
        }
        hints
    }

    /// Emoji summary of a finished game, e.g. "Word Sprint 3/6" + grid
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let score = match self.outcome() {
            Outcome::InProgress => return None,
            Outcome::Won { guesses } => guesses.to_string(),
            Outcome::Lost => "X".to_string(),
        };

        let mut text = format!("Word Sprint {score}/{}", self.config().max_guesses());
        for line in self.board.rows().iter().filter_map(Row::to_emoji) {
            text.push('\n');
            text.push_str(&line);
        }
        Some(text)
    }
}
