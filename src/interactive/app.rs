//! TUI application state and event loop

use super::listener::KeyListener;
use crate::core::LetterStatus;
use crate::evaluator::{EvaluateError, GuessEvaluator};
use crate::session::{Action, GameSession, InputEvent, PendingGuess};
use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{error, info};

/// Evaluator result routed back to the event loop
type Completion = (PendingGuess, Result<Vec<LetterStatus>, EvaluateError>);

/// Application state
pub struct App {
    pub session: GameSession,
    pub should_quit: bool,
    pub games_played: usize,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            should_quit: false,
            games_played: 0,
        }
    }

    /// Start over against the same evaluator
    pub fn new_game(&mut self) {
        let config = self.session.config();
        let evaluator = self.session.evaluator();
        self.session = GameSession::new(config, evaluator);
        self.games_played += 1;
        info!(games_played = self.games_played, "New game started");
    }

    /// React to one key press
    ///
    /// Returns a guess to dispatch when the key started a submission.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PendingGuess> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            _ => {}
        }

        // Once the game is decided the board no longer takes letters
        if self.session.outcome().is_finished() {
            match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return None;
        }

        match self.session.handle(InputEvent::from(key)) {
            Action::Evaluate(pending) => Some(pending),
            Action::None => None,
        }
    }
}

/// Toast shown when the evaluator task dies without answering
const EVALUATOR_CRASHED: &str = "Evaluator stopped unexpectedly";

/// Run the evaluator call off the event loop and report back over `tx`
///
/// Every dispatched guess gets exactly one completion, even if the
/// evaluator panics.
fn dispatch(
    evaluator: Arc<dyn GuessEvaluator>,
    pending: PendingGuess,
    tx: UnboundedSender<Completion>,
) {
    let guess = pending.guess().to_string();
    let call = tokio::spawn(async move { evaluator.evaluate(&guess).await });

    tokio::spawn(async move {
        let result = call.await.unwrap_or_else(|err| {
            error!(error = %err, "Evaluator task failed");
            Err(EvaluateError::Transport {
                message: EVALUATOR_CRASHED.to_string(),
            })
        });
        // Receiver only goes away when the UI is shutting down
        let _ = tx.send((pending, result));
    });
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering.
pub async fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();

    // One subscription for the whole UI lifetime; released on return
    let _listener = KeyListener::spawn(key_tx);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else {
                    info!("Key listener closed");
                    break;
                };
                if let Some(pending) = app.handle_key(key) {
                    dispatch(app.session.evaluator(), pending, done_tx.clone());
                }
            }
            Some((pending, result)) = done_rx.recv() => {
                app.session.complete_submission(pending, result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
