//! Simple interactive CLI mode
//!
//! Line-oriented client without the TUI. Each entered line is typed into the
//! active row letter by letter and then submitted, exactly as the keyboard
//! would.

use crate::output::{print_outcome, print_session};
use crate::session::{Action, GameSession, InputEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

/// Type `line` into the session and press enter
///
/// Whatever is already in the active row is cleared first. Returns the
/// submission to evaluate, if the row was complete.
pub fn enter_line(session: &mut GameSession, line: &str) -> Action {
    while !session.board().active_row().is_empty() && !session.is_busy() {
        let before = session.board().active_row().len();
        session.handle(InputEvent::Backspace);
        if session.board().active_row().len() == before {
            break;
        }
    }

    for ch in line.chars() {
        session.handle(InputEvent::Letter(ch));
    }
    session.handle(InputEvent::Enter)
}

/// Run the simple interactive CLI mode
///
/// Reads guesses from `input` until the game ends, `quit` is entered, or the
/// input is exhausted.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub async fn run_simple<R>(mut session: GameSession, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Word Sprint - Line Mode         ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Type a {}-letter guess and press Enter. 'quit' to exit.",
        session.config().word_len()
    );

    let mut lines = input.lines();

    loop {
        print_session(&session);

        if session.outcome().is_finished() {
            print_outcome(&session);
            break;
        }

        let Some(line) = lines.next_line().await? else {
            info!("Input closed");
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Action::Evaluate(pending) = enter_line(&mut session, line) {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("Checking {}...", pending.guess()));
            spinner.enable_steady_tick(Duration::from_millis(80));

            let result = session.evaluator().evaluate(pending.guess()).await;
            spinner.finish_and_clear();
            session.complete_submission(pending, result);
        }
    }

    Ok(())
}
