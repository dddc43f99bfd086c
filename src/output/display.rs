//! Display functions for the line-mode client

use super::formatters::{colored_tile, keyboard_lines};
use crate::session::{GameSession, Outcome};
use colored::Colorize;

/// Print the board, the toast and the keyboard hints
pub fn print_session(session: &GameSession) {
    let view = session.project_view();

    println!("\n{}", "─".repeat(40).cyan());
    for cells in &view.rows {
        let line: Vec<String> = cells.iter().map(|c| colored_tile(c).to_string()).collect();
        println!("   {}", line.join(" "));
    }
    println!("{}", "─".repeat(40).cyan());

    for line in keyboard_lines(&session.letter_hints()) {
        println!("   {line}");
    }

    if !session.toast().is_empty() {
        println!("\n{}", session.toast().red().bold());
    }
}

/// Print the end-of-game banner and share grid
pub fn print_outcome(session: &GameSession) {
    match session.outcome() {
        Outcome::InProgress => return,
        Outcome::Won { guesses } => {
            println!(
                "\n{}",
                format!("✅ Solved in {guesses} guesses!").green().bold()
            );
        }
        Outcome::Lost => {
            println!("\n{}", "❌ Out of guesses".red().bold());
        }
    }

    if let Some(share) = session.share_text() {
        println!("\n{share}");
    }
}
