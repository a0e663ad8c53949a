//! Football Trivia Quiz Library
//!
//! This library provides a football trivia quiz: a fixed question catalogue
//! split across three difficulty levels, a per-play-through session state
//! machine with randomized answer order, and per-level best-score persistence.
//!
//! # Examples
//!
//! ```rust
//! use footy_trivia::error::AppError;
//! use footy_trivia::quiz::{Level, MemoryScoreStore, Progress, QuizSession, reconcile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let store = MemoryScoreStore::new();
//!     let mut session = QuizSession::with_seed(7);
//!
//!     // Play one perfect run through the easy level
//!     session.start(Level::Easy)?;
//!     loop {
//!         let correct = session.current_question()?.correct_index();
//!         session.submit_answer(correct)?;
//!         if let Progress::Finished { level, score, total } = session.advance()? {
//!             let best = reconcile(&store, level, score).await?;
//!             assert_eq!((score as usize, best as usize), (total, total));
//!             break;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod quiz;
pub mod quiz_ui;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use quiz::{
    AnswerFeedback, FileScoreStore, Level, MemoryScoreStore, PresentedQuestion, Progress, Question,
    QuizError, QuizSession, ScoreStore, SessionPhase, questions_for, reconcile,
};
pub use quiz_ui::QuizPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
