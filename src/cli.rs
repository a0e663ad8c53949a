use crate::quiz::Level;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --scores flag is set (print the best-score report and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.scores
        || args.new_default_level.is_some()
        || args.clear_default_level
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Football Trivia Quiz
///
/// A ten-question football trivia quiz at three difficulty levels. Answer
/// options are shuffled on every play-through; your best score per level is
/// saved locally and survives restarts.
///
/// In the quiz (default mode):
/// - Press 1-9 to lock in an answer; the correct option is then revealed
/// - Press Enter to move on to the next question
/// - Press 'b' to go back to the level menu, 'q' to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show saved best scores for every level and exit. Useful for a quick
    /// check without starting a quiz.
    #[arg(short = 's', long = "scores")]
    pub scores: bool,

    /// Start directly at the given level, skipping the level menu.
    #[arg(
        short = 'L',
        long = "level",
        value_enum,
        help_heading = "Play Options"
    )]
    pub level: Option<Level>,

    /// Disable colored output.
    /// Useful for terminals with unreadable color schemes or plain text capture.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Save a default level in the config; later runs start there without
    /// showing the level menu.
    #[arg(long = "set-level", value_enum, help_heading = "Configuration")]
    pub new_default_level: Option<Level>,

    /// Clear the default level from the config. This reverts to showing the level menu.
    #[arg(long = "clear-level", help_heading = "Configuration")]
    pub clear_default_level: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Use a fixed shuffle seed so the option order is reproducible.
    #[arg(long = "seed", help_heading = "Debug")]
    pub seed: Option<u64>,

    /// Enable debug logging and keep the quiz on the main screen instead of
    /// the alternate screen, so terminal scrollback is preserved.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_from(argv: &[&str]) -> Args {
        let mut full = vec!["footy_trivia"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_are_interactive() {
        let args = args_from(&[]);
        assert!(!is_noninteractive_mode(&args));
        assert!(args.level.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_scores_flag_is_noninteractive() {
        let args = args_from(&["--scores"]);
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_config_operations_are_noninteractive() {
        assert!(is_noninteractive_mode(&args_from(&["--set-level", "easy"])));
        assert!(is_noninteractive_mode(&args_from(&["--clear-level"])));
        assert!(is_noninteractive_mode(&args_from(&[
            "--set-log-file",
            "/tmp/quiz.log"
        ])));
        assert!(is_noninteractive_mode(&args_from(&["--clear-log-file"])));
        assert!(is_noninteractive_mode(&args_from(&["--list-config"])));
    }

    #[test]
    fn test_level_flag_parses_value_enum() {
        assert_eq!(args_from(&["--level", "easy"]).level, Some(Level::Easy));
        assert_eq!(args_from(&["-L", "hard"]).level, Some(Level::Hard));
    }

    #[test]
    fn test_debug_stays_interactive() {
        let args = args_from(&["--debug", "--seed", "42"]);
        assert!(!is_noninteractive_mode(&args));
        assert_eq!(args.seed, Some(42));
    }
}
