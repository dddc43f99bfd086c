//! Interactive TUI interface

mod app;
mod listener;
mod rendering;

pub use app::{App, run_tui};
