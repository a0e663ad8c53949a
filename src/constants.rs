//! Application-wide constants and configuration values
//!
//! This module centralizes magic values shared between the quiz core, the
//! persistence layer and the terminal front-end.

/// Prefix for persisted best-score keys. Combined with a level's display
/// name (lowercased, spaces removed) this reproduces the key scheme the
/// original releases used, so existing score files keep working.
pub const SCORE_KEY_PREFIX: &str = "quizResult_";

/// Number of questions in the reference catalogue per level. The session
/// layer works with any non-empty count; this is only the shipped size.
pub const QUESTIONS_PER_LEVEL: usize = 10;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for default level override
    pub const LEVEL: &str = "FOOTY_TRIVIA_LEVEL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FOOTY_TRIVIA_LOG_FILE";
}

/// UI layout constants
pub mod ui {
    /// Fixed page width used by the quiz screens
    pub const PAGE_WIDTH: usize = 50;

    /// Width of the highlighted title block in the header row
    pub const TITLE_WIDTH: usize = 20;

    /// Highest answer count addressable with the digit keys 1-9
    pub const MAX_OPTION_KEYS: usize = 9;
}
