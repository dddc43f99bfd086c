//! TUI rendering with ratatui
//!
//! Everything drawn here comes from `GameSession::project_view` and the
//! session's read-only accessors.

use super::app::App;
use crate::core::LetterStatus;
use crate::output::formatters::KEYBOARD_ROWS;
use crate::session::{BoardView, Cell, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use rustc_hash::FxHashMap;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.session.project_view();
    let board_height = u16::try_from(view.rows.len()).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Toast
            Constraint::Length(5),            // Keyboard
            Constraint::Min(1),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &view, app, chunks[1]);
    render_toast(f, &view, app, chunks[2]);
    render_keyboard(f, &app.session.letter_hints(), chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile background for a letter status
#[must_use]
const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn tile_style(cell: &Cell, active: bool) -> Style {
    match cell.status {
        Some(status) => Style::default()
            .fg(Color::Black)
            .bg(status_color(status))
            .add_modifier(Modifier::BOLD),
        None if active => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(58, 58, 60))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Gray).bg(Color::Rgb(30, 30, 30)),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD SPRINT")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, view: &BoardView, app: &App, area: Rect) {
    let in_play = !app.session.outcome().is_finished();

    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let active = in_play && i == view.active_row;
            let mut spans = Vec::with_capacity(cells.len() * 2);
            for cell in cells {
                let ch = if cell.is_blank() { '·' } else { cell.ch };
                spans.push(Span::styled(format!(" {ch} "), tile_style(cell, active)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_toast(f: &mut Frame, view: &BoardView, app: &App, area: Rect) {
    let (text, color) = match app.session.outcome() {
        Outcome::Won { guesses } => (
            format!("Solved in {guesses}! Press 'n' for new game or 'q' to quit."),
            Color::Green,
        ),
        Outcome::Lost => (
            "Out of guesses. Press 'n' for new game or 'q' to quit.".to_string(),
            Color::Red,
        ),
        Outcome::InProgress if app.session.is_busy() => (
            format!("Checking {}...", view.row_text(view.active_row)),
            Color::Cyan,
        ),
        Outcome::InProgress => (app.session.toast().to_string(), Color::Red),
    };

    let toast = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(toast, area);
}

fn render_keyboard(f: &mut Frame, hints: &FxHashMap<char, LetterStatus>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|ch| {
                    let style = hints.get(&ch).map_or_else(
                        || Style::default().fg(Color::White),
                        |&status| Style::default().fg(Color::Black).bg(status_color(status)),
                    );
                    Span::styled(format!(" {ch} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let config = app.session.config();
    let progress = format!(
        "Guess {}/{} | Games: {}",
        (app.session.board().resolved_count() + 1).min(config.max_guesses()),
        config.max_guesses(),
        app.games_played + 1
    );
    let progress = Paragraph::new(progress).alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let help_text = if app.session.outcome().is_finished() {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{EvaluateError, GuessEvaluator};
    use crate::session::GameSession;
    use async_trait::async_trait;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    struct Unreachable;

    #[async_trait]
    impl GuessEvaluator for Unreachable {
        async fn evaluate(&self, _guess: &str) -> Result<Vec<LetterStatus>, EvaluateError> {
            Err(EvaluateError::Transport {
                message: "unreachable".into(),
            })
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn status_colors_distinct() {
        assert_ne!(
            status_color(LetterStatus::Correct),
            status_color(LetterStatus::Present)
        );
        assert_ne!(
            status_color(LetterStatus::Present),
            status_color(LetterStatus::Absent)
        );
    }

    #[test]
    fn ui_draws_typed_letters_and_toast() {
        let mut session = GameSession::with_defaults(Arc::new(Unreachable));
        for ch in "cr".chars() {
            session.append_letter(ch);
        }
        assert!(session.begin_submission().is_none());
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("WORD SPRINT"));
        assert!(text.contains(" C   R "));
        assert!(text.contains("Not enough letters"));
    }

    #[test]
    fn ui_names_guess_being_checked() {
        let mut session = GameSession::with_defaults(Arc::new(Unreachable));
        for ch in "crane".chars() {
            session.append_letter(ch);
        }
        assert!(session.begin_submission().is_some());
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Checking CRANE..."));
    }
}
