//! The quiz session state machine.
//!
//! One [`QuizSession`] covers one play-through of one level. Starting a
//! session materializes a [`PresentedQuestion`] per catalogue question by
//! shuffling that question's options (question order itself is kept).
//! Answering is two-phase: [`QuizSession::submit_answer`] locks the answer in
//! and reveals correctness, [`QuizSession::advance`] moves on. The split
//! mirrors the player-visible flow, where feedback is shown before the next
//! question appears, and makes illegal sequences (double submit, advance
//! without an answer) detectable.

use crate::quiz::bank::{Level, Question, questions_for};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::fmt;
use thiserror::Error;

/// Contract violations raised by [`QuizSession`].
///
/// These indicate the caller broke the state machine, not a player-facing
/// condition; a front-end that respects the transitions never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("`{operation}` is not valid while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("answer index {index} is out of range for a question with {option_count} options")]
    InvalidAnswer { index: usize, option_count: usize },
}

/// Coarse observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingStart,
    InProgress,
    Completed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::AwaitingStart => "awaiting start",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// A question as shown to the player: options in session-specific random
/// order, with the correct index recomputed for that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl PresentedQuestion {
    /// Builds a presentation of `question` with its options permuted by
    /// `rng`. The permutation preserves the option texts; the returned
    /// correct index points at the same text that was correct in the source.
    pub fn present<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..question.options().len()).collect();
        order.shuffle(rng);
        let options = order
            .iter()
            .map(|&original| question.options()[original].clone())
            .collect();
        let correct_index = order
            .iter()
            .position(|&original| original == question.correct_index())
            .expect("a permutation of 0..len contains every option index");
        PresentedQuestion {
            prompt: question.prompt().to_string(),
            options,
            correct_index,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in presentation order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option within [`Self::options`].
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

/// Result of locking in an answer, for the front-end's feedback step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    /// Correct index within the presented options, so the front-end can
    /// highlight the right answer even after a wrong choice.
    pub correct_index: usize,
}

/// Outcome of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Moved to the question at `index` (0-based) of `total`.
    NextQuestion { index: usize, total: usize },
    /// The play-through is over; the caller should reconcile the score
    /// against the persisted best for `level`.
    Finished { level: Level, score: u32, total: usize },
}

#[derive(Debug)]
enum State {
    AwaitingStart,
    InProgress {
        level: Level,
        questions: Vec<PresentedQuestion>,
        cursor: usize,
        correct_count: u32,
        answered: bool,
    },
    Completed {
        level: Level,
        score: u32,
        total: usize,
    },
}

/// One play-through of one level, from level choice to completion.
///
/// Owns its RNG so every `start` draws fresh, independent permutations.
/// [`QuizSession::with_seed`] pins the RNG for reproducible runs.
#[derive(Debug)]
pub struct QuizSession {
    rng: SmallRng,
    state: State,
}

impl QuizSession {
    /// Creates a session with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Creates a session whose shuffles are determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        QuizSession {
            rng,
            state: State::AwaitingStart,
        }
    }

    /// Starts a play-through of `level`.
    ///
    /// Builds one [`PresentedQuestion`] per catalogue question, each with an
    /// independently drawn permutation of its options. Question order is not
    /// shuffled. Valid only from the awaiting-start state.
    pub fn start(&mut self, level: Level) -> Result<(), QuizError> {
        if !matches!(self.state, State::AwaitingStart) {
            return Err(QuizError::InvalidState {
                operation: "start",
                state: self.state_name(),
            });
        }
        let questions = questions_for(level)
            .iter()
            .map(|question| PresentedQuestion::present(question, &mut self.rng))
            .collect();
        self.state = State::InProgress {
            level,
            questions,
            cursor: 0,
            correct_count: 0,
            answered: false,
        };
        Ok(())
    }

    /// Locks in the answer `option_index` for the current question.
    ///
    /// Records correctness and enables [`Self::advance`]; the cursor does not
    /// move. Valid only while a question is awaiting its answer. An index
    /// outside the current question's options fails with
    /// [`QuizError::InvalidAnswer`].
    pub fn submit_answer(&mut self, option_index: usize) -> Result<AnswerFeedback, QuizError> {
        let state_name = self.state_name();
        match &mut self.state {
            State::InProgress {
                questions,
                cursor,
                correct_count,
                answered: answered @ false,
                ..
            } => {
                let question = &questions[*cursor];
                let option_count = question.options().len();
                if option_index >= option_count {
                    return Err(QuizError::InvalidAnswer {
                        index: option_index,
                        option_count,
                    });
                }
                let is_correct = option_index == question.correct_index();
                if is_correct {
                    *correct_count += 1;
                }
                *answered = true;
                Ok(AnswerFeedback {
                    is_correct,
                    correct_index: question.correct_index(),
                })
            }
            _ => Err(QuizError::InvalidState {
                operation: "submit_answer",
                state: state_name,
            }),
        }
    }

    /// Moves past the current, already-answered question.
    ///
    /// Either steps to the next question or, after the last one, completes
    /// the session and reports the final score for reconciliation. Valid
    /// only after [`Self::submit_answer`] for the current question.
    pub fn advance(&mut self) -> Result<Progress, QuizError> {
        let state_name = self.state_name();
        let finished = match &mut self.state {
            State::InProgress {
                level,
                questions,
                cursor,
                correct_count,
                answered: answered @ true,
            } => {
                if *cursor + 1 < questions.len() {
                    *cursor += 1;
                    *answered = false;
                    return Ok(Progress::NextQuestion {
                        index: *cursor,
                        total: questions.len(),
                    });
                }
                Progress::Finished {
                    level: *level,
                    score: *correct_count,
                    total: questions.len(),
                }
            }
            _ => {
                return Err(QuizError::InvalidState {
                    operation: "advance",
                    state: state_name,
                });
            }
        };
        if let Progress::Finished { level, score, total } = finished {
            self.state = State::Completed { level, score, total };
        }
        Ok(finished)
    }

    /// The question currently awaiting an answer (or awaiting advance).
    pub fn current_question(&self) -> Result<&PresentedQuestion, QuizError> {
        match &self.state {
            State::InProgress {
                questions, cursor, ..
            } => Ok(&questions[*cursor]),
            _ => Err(QuizError::InvalidState {
                operation: "current_question",
                state: self.state_name(),
            }),
        }
    }

    /// Discards all play-through state and returns to awaiting-start.
    /// Always safe; this is the only abort mechanism.
    pub fn restart(&mut self) {
        self.state = State::AwaitingStart;
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            State::AwaitingStart => SessionPhase::AwaitingStart,
            State::InProgress { .. } => SessionPhase::InProgress,
            State::Completed { .. } => SessionPhase::Completed,
        }
    }

    /// Level of the running or completed play-through.
    pub fn level(&self) -> Option<Level> {
        match &self.state {
            State::AwaitingStart => None,
            State::InProgress { level, .. } => Some(*level),
            State::Completed { level, .. } => Some(*level),
        }
    }

    /// 1-based number of the current question, while in progress.
    pub fn question_number(&self) -> Option<usize> {
        match &self.state {
            State::InProgress { cursor, .. } => Some(cursor + 1),
            _ => None,
        }
    }

    pub fn total_questions(&self) -> Option<usize> {
        match &self.state {
            State::AwaitingStart => None,
            State::InProgress { questions, .. } => Some(questions.len()),
            State::Completed { total, .. } => Some(*total),
        }
    }

    /// Correct answers so far (the final score once completed).
    pub fn correct_count(&self) -> u32 {
        match &self.state {
            State::AwaitingStart => 0,
            State::InProgress { correct_count, .. } => *correct_count,
            State::Completed { score, .. } => *score,
        }
    }

    /// Final `(score, total)` of a completed play-through.
    pub fn final_score(&self) -> Option<(u32, usize)> {
        match &self.state {
            State::Completed { score, total, .. } => Some((*score, *total)),
            _ => None,
        }
    }

    /// Whether the current question already has a locked-in answer.
    pub fn awaiting_advance(&self) -> bool {
        matches!(self.state, State::InProgress { answered: true, .. })
    }

    fn state_name(&self) -> &'static str {
        match &self.state {
            State::AwaitingStart => "awaiting level selection",
            State::InProgress {
                answered: false, ..
            } => "awaiting an answer",
            State::InProgress { answered: true, .. } => "awaiting advance",
            State::Completed { .. } => "completed",
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
