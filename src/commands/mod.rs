//! Command implementations

pub mod health;
pub mod simple;

pub use health::run_health;
pub use simple::{enter_line, run_simple};
