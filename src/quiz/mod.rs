//! Quiz core: question catalogue, session state machine and best-score
//! persistence.
//!
//! The modules here are independent of the terminal front-end. A play-through
//! is driven entirely through [`QuizSession`]; persistence goes through the
//! injected [`ScoreStore`] collaborator so tests can substitute
//! [`MemoryScoreStore`] for the real file-backed store.

pub mod bank;
pub mod scores;
pub mod session;

pub use bank::{Level, Question, questions_for};
pub use scores::{FileScoreStore, MemoryScoreStore, ScoreStore, reconcile};
pub use session::{
    AnswerFeedback, PresentedQuestion, Progress, QuizError, QuizSession, SessionPhase,
};
