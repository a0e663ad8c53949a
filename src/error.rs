use crate::quiz::QuizError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Quiz contract violation: {0}")]
    Quiz(#[from] QuizError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Score store error: {message} (file: {path})")]
    ScoreStore { message: String, path: String },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a score store error carrying the file path it concerns
    pub fn score_store_error(msg: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ScoreStore {
            message: msg.into(),
            path: path.into(),
        }
    }
}
