//! Word Sprint
//!
//! Terminal client for a Wordle-style guessing game. The client owns the
//! board and input handling; scoring is done by a remote evaluator.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use word_sprint::evaluator::HttpEvaluator;
//! use word_sprint::session::{GameSession, InputEvent};
//!
//! # async fn demo() {
//! let evaluator = Arc::new(HttpEvaluator::new("http://127.0.0.1:8000"));
//! let mut session = GameSession::with_defaults(evaluator);
//!
//! for ch in "crane".chars() {
//!     session.handle(InputEvent::Letter(ch));
//! }
//! session.submit_active_row().await;
//!
//! let view = session.project_view();
//! println!("{:?}", view.rows[0]);
//! # }
//! ```

// Core domain types
pub mod core;

// Client-side game state machine
pub mod session;

// Remote guess evaluation
pub mod evaluator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
