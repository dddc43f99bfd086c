//! Terminal output formatting
//!
//! Coloured board printing for the line-mode client.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_session};
