use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::quiz::{FileScoreStore, QuizSession};
use crate::ui::{self, UiOptions};
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Sets up terminal raw mode and the alternate screen
/// - Runs the quiz UI against the file-backed score store
/// - Cleans up terminal state even when the UI errors
///
/// With `--debug` the alternate screen is skipped so the scrollback keeps
/// the final frames.
pub async fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    let mut session = match args.seed {
        Some(seed) => QuizSession::with_seed(seed),
        None => QuizSession::new(),
    };
    let store = FileScoreStore::new();
    tracing::debug!("Best scores are stored at: {}", store.path().display());

    let options = UiOptions {
        plain: args.plain,
        preselected_level: args.level.or(config.default_level),
    };

    enable_raw_mode()?;
    let mut out = stdout();

    // Set terminal title/header to show app name
    execute!(out, SetTitle("FOOTY TRIVIA"))?;

    if !args.debug {
        execute!(out, EnterAlternateScreen)?;
    }

    let result = ui::run_quiz_ui(&mut session, &store, &options, &mut out).await;

    // Clean up terminal
    if !args.debug {
        execute!(out, LeaveAlternateScreen)?;
    }
    disable_raw_mode()?;

    result
}
