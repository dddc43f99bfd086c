//! Word Sprint - CLI
//!
//! Play a Wordle-style game in the terminal against a remote evaluator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_sprint::{
    commands::{run_health, run_simple},
    evaluator::HttpEvaluator,
    interactive::{App, run_tui},
    session::GameSession,
};

#[derive(Parser)]
#[command(
    name = "word_sprint",
    about = "Wordle-style guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the guess evaluator
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_SPRINT_SERVER",
        default_value = "http://127.0.0.1:8000"
    )]
    server: String,

    /// Log file used while the terminal is taken over by the game
    #[arg(long, global = true, default_value = "word_sprint.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Check that the evaluator is reachable
    Health,
}

impl Commands {
    /// Filter used when `RUST_LOG` is unset
    ///
    /// `health` talks on stderr, where its own OK/FAIL line already reports
    /// evaluator failures, so only errors are logged there.
    const fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Play | Self::Simple => "info",
            Self::Health => "error",
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Send logs to a file so they don't interfere with the game screen
fn init_file_logging(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let evaluator = HttpEvaluator::new(cli.server);
    let default_filter = command.default_log_filter();

    match command {
        Commands::Play => {
            init_file_logging(&cli.log_file, default_filter)?;
            info!(server = %evaluator.base_url(), "Starting TUI");
            let session = GameSession::with_defaults(Arc::new(evaluator));
            run_tui(App::new(session)).await
        }
        Commands::Simple => {
            init_file_logging(&cli.log_file, default_filter)?;
            info!(server = %evaluator.base_url(), "Starting line mode");
            let session = GameSession::with_defaults(Arc::new(evaluator));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_simple(session, stdin).await
        }
        Commands::Health => {
            init_stderr_logging(default_filter);
            run_health(&evaluator).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filters() {
        assert_eq!(Commands::Play.default_log_filter(), "info");
        assert_eq!(Commands::Simple.default_log_filter(), "info");
        assert_eq!(Commands::Health.default_log_filter(), "error");
    }

    #[test]
    fn cli_defaults_to_play() {
        let cli = Cli::try_parse_from(["word_sprint"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_file, PathBuf::from("word_sprint.log"));

        let cli = Cli::try_parse_from(["word_sprint", "health"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Health)));
    }
}
