use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::quiz::{Level, ScoreStore, questions_for};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.scores && args.level.is_some() {
        return Err(AppError::config_error(
            "--scores prints the report and exits; it cannot be combined with --level",
        ));
    }
    if args.scores && args.seed.is_some() {
        return Err(AppError::config_error(
            "--seed only affects a quiz run; it cannot be combined with --scores",
        ));
    }
    Ok(())
}

/// Handles the --scores command.
///
/// Prints the persisted best score for every level, with absent entries
/// shown as zero.
pub async fn handle_scores_command<S: ScoreStore>(store: &S) -> Result<(), AppError> {
    println!("\nBest Scores");
    println!("────────────────────────────────────");
    for level in Level::ALL {
        let best = store.get(&level.storage_key()).await?;
        let total = questions_for(level).len();
        println!("{:<13} {best:>2}/{total}", level.display_name());
    }
    println!("────────────────────────────────────");
    Ok(())
}

/// Handles the --list-config command.
///
/// Displays current configuration settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands
/// (--set-level, --clear-level, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(level) = args.new_default_level {
        config.default_level = Some(level);
        println!("Default level set to {level}.");
    } else if args.clear_default_level {
        config.default_level = None;
        println!("Default level cleared. The level menu will be shown.");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}
