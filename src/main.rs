// src/main.rs
use clap::Parser;
use footy_trivia::app;
use footy_trivia::cli::Args;
use footy_trivia::commands::{
    handle_config_update_command, handle_list_config_command, handle_scores_command, validate_args,
};
use footy_trivia::config::Config;
use footy_trivia::error::AppError;
use footy_trivia::logging::setup_logging;
use footy_trivia::quiz::FileScoreStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    validate_args(&args)?;

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations
    if args.list_config {
        handle_list_config_command().await?;
        return Ok(());
    }

    if args.new_default_level.is_some()
        || args.clear_default_level
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
    {
        handle_config_update_command(&args).await?;
        return Ok(());
    }

    // Quick report mode - print best scores and exit
    if args.scores {
        let store = FileScoreStore::new();
        handle_scores_command(&store).await?;
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    app::run_interactive(&args, &config).await
}
