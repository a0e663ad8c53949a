//! Interactive quiz flow: level menu → questions → completion.
//!
//! The loop redraws one page per state change and blocks on keyboard input
//! in between. All quiz rules live in [`QuizSession`]; this module only
//! translates keys into session operations and session state into pages.
//! Digit keys outside the current question's option range are ignored here,
//! so the session's contract errors never fire during normal play.

use crate::constants::ui::MAX_OPTION_KEYS;
use crate::error::AppError;
use crate::quiz::{
    AnswerFeedback, Level, Progress, QuizSession, ScoreStore, SessionPhase, questions_for,
    reconcile,
};
use crate::quiz_ui::{OptionState, QuizPage};
use std::io::Write;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Front-end options resolved from CLI flags and config.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Render without colors
    pub plain: bool,
    /// Skip the level menu and start here
    pub preselected_level: Option<Level>,
}

/// Everything the completion screen needs, computed once when a
/// play-through finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CompletionSummary {
    level: Level,
    score: u32,
    total: usize,
    /// Updated best after reconciliation; `None` when the store failed
    best: Option<u32>,
    improved: bool,
}

/// Runs the quiz until the player quits.
///
/// The session must be freshly constructed (awaiting start). Score
/// reconciliation is awaited before the completion screen is drawn; a
/// failing store is logged and the screen falls back to the session score
/// alone.
pub async fn run_quiz_ui<S: ScoreStore, W: Write>(
    session: &mut QuizSession,
    store: &S,
    options: &UiOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let mut feedback: Option<(usize, AnswerFeedback)> = None;
    let mut summary: Option<CompletionSummary> = None;

    if let Some(level) = options.preselected_level {
        tracing::debug!("Starting preselected level: {level}");
        session.start(level)?;
    }

    loop {
        let page = match session.phase() {
            SessionPhase::AwaitingStart => build_level_menu(store, options.plain).await,
            SessionPhase::InProgress => build_question_page(session, feedback, options.plain)?,
            SessionPhase::Completed => build_completion_page(summary, session, options.plain),
        };
        page.render(out)?;

        let key = next_key_press()?;
        if is_quit_key(&key) {
            return Ok(());
        }

        match session.phase() {
            SessionPhase::AwaitingStart => match key.code {
                KeyCode::Char(c @ '1'..='3') => {
                    let index = c as usize - '1' as usize;
                    session.start(Level::ALL[index])?;
                    feedback = None;
                }
                _ => {}
            },
            SessionPhase::InProgress => match key.code {
                KeyCode::Char('b') | KeyCode::Esc => {
                    tracing::debug!("Play-through aborted back to the level menu");
                    session.restart();
                    feedback = None;
                }
                KeyCode::Char(c @ '1'..='9') if feedback.is_none() => {
                    let index = c as usize - '1' as usize;
                    let option_count = session.current_question()?.options().len();
                    if index < option_count.min(MAX_OPTION_KEYS) {
                        let result = session.submit_answer(index)?;
                        feedback = Some((index, result));
                    }
                    // Keys past the option count are ignored, not errors
                }
                KeyCode::Enter | KeyCode::Char('n') if feedback.is_some() => {
                    match session.advance()? {
                        Progress::NextQuestion { .. } => {
                            feedback = None;
                        }
                        Progress::Finished { level, score, total } => {
                            feedback = None;
                            summary = Some(finish_play_through(store, level, score, total).await);
                        }
                    }
                }
                _ => {}
            },
            SessionPhase::Completed => match key.code {
                KeyCode::Enter | KeyCode::Char('b') => {
                    session.restart();
                    summary = None;
                }
                _ => {}
            },
        }
    }
}

/// Blocks until a key press event (releases and repeats are skipped).
fn next_key_press() -> Result<KeyEvent, AppError> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Reconciles the finished score against the stored best. Persistence
/// problems are warnings; the in-memory score is reported regardless.
async fn finish_play_through<S: ScoreStore>(
    store: &S,
    level: Level,
    score: u32,
    total: usize,
) -> CompletionSummary {
    let previous = match store.get(&level.storage_key()).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                "Could not read the stored best score for {}: {e}",
                level.display_name()
            );
            None
        }
    };

    let best = match reconcile(store, level, score).await {
        Ok(best) => Some(best),
        Err(e) => {
            tracing::warn!(
                "Could not persist the best score for {}: {e}",
                level.display_name()
            );
            None
        }
    };

    let improved = matches!((previous, best), (Some(p), Some(b)) if b > p);
    CompletionSummary {
        level,
        score,
        total,
        best,
        improved,
    }
}

async fn build_level_menu<S: ScoreStore>(store: &S, plain: bool) -> QuizPage {
    let mut page = QuizPage::new("QUIZ", "CHOOSE YOUR LEVEL", plain);
    page.add_spacer();
    for (index, level) in Level::ALL.iter().enumerate() {
        let total = questions_for(*level).len();
        let label = match store.get(&level.storage_key()).await {
            Ok(best) => format!("{:<13} best {best}/{total}", level.display_name()),
            Err(e) => {
                tracing::warn!("Could not read best scores for the menu: {e}");
                level.display_name().to_string()
            }
        };
        let key = char::from(b'1' + index as u8);
        page.add_option(key, &label, OptionState::Open);
    }
    page.set_controls("1-3=Play q=Quit");
    page
}

fn build_question_page(
    session: &QuizSession,
    feedback: Option<(usize, AnswerFeedback)>,
    plain: bool,
) -> Result<QuizPage, AppError> {
    let question = session.current_question().map_err(AppError::from)?;
    let number = session.question_number().unwrap_or(0);
    let total = session.total_questions().unwrap_or(0);
    let title = session
        .level()
        .map(|level| level.display_name().to_uppercase())
        .unwrap_or_default();

    let mut page = QuizPage::new(&title, &format!("QUESTION {number}/{total}"), plain);
    page.add_prompt(question.prompt());
    page.add_spacer();

    for (index, option) in question.options().iter().enumerate() {
        let state = match feedback {
            None => OptionState::Open,
            Some((chosen, result)) => {
                if index == result.correct_index {
                    OptionState::Correct
                } else if index == chosen {
                    OptionState::WrongChoice
                } else {
                    OptionState::Locked
                }
            }
        };
        let key = char::from(b'1' + index as u8);
        page.add_option(key, option, state);
    }

    match feedback {
        Some((_, result)) => {
            page.add_spacer();
            page.add_message(if result.is_correct { "Correct!" } else { "Wrong!" });
            let proceed = if number == total { "Enter=Finish" } else { "Enter=Next" };
            page.set_controls(&format!("{proceed} b=Menu q=Quit"));
        }
        None => {
            let highest_key = question.options().len().min(MAX_OPTION_KEYS);
            page.set_controls(&format!("1-{highest_key}=Answer b=Menu q=Quit"));
        }
    }

    Ok(page)
}

fn build_completion_page(
    summary: Option<CompletionSummary>,
    session: &QuizSession,
    plain: bool,
) -> QuizPage {
    // The summary is always present after a finished play-through; the
    // session itself is the fallback source of truth.
    let (score, total) = summary
        .map(|s| (s.score, s.total))
        .or(session.final_score())
        .unwrap_or((0, 0));
    let title = session
        .level()
        .map(|level| level.display_name().to_uppercase())
        .unwrap_or_default();

    let mut page = QuizPage::new(&title, "LEVEL COMPLETE", plain);
    page.add_spacer();
    page.add_message(&format!("Your score: {score}/{total}"));
    match summary {
        Some(CompletionSummary {
            best: Some(best),
            improved,
            ..
        }) => {
            if improved {
                page.add_message("NEW RECORD!");
            }
            page.add_message(&format!("Best: {best}/{total}"));
        }
        _ => {
            page.add_message("(best score could not be saved)");
        }
    }
    page.set_controls("Enter=Play again q=Quit");
    page
}
