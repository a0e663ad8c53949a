//! The fixed question catalogue.
//!
//! Three levels, each with an ordered list of questions. Lookups are pure:
//! the same level returns the identical sequence for the whole process
//! lifetime. Presentation order of the answer options is randomized per
//! session in [`crate::quiz::session`], never here.

use crate::constants::SCORE_KEY_PREFIX;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A single trivia question with its answer options.
///
/// Immutable once constructed. `correct_index` always points into `options`;
/// the constructor enforces this, so downstream code can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Creates a question from a prompt, its answer options and the index of
    /// the correct option.
    ///
    /// # Panics
    /// Panics when `options` has fewer than two entries or `correct_index`
    /// is out of range. The catalogue is built from literals at startup, so
    /// a violation is a programming error, not a runtime condition.
    pub fn new(prompt: &str, options: &[&str], correct_index: usize) -> Self {
        assert!(
            options.len() >= 2,
            "a question needs at least two options, got {}",
            options.len()
        );
        assert!(
            correct_index < options.len(),
            "correct index {correct_index} out of range for {} options",
            options.len()
        );
        Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_index,
        }
    }

    /// The question text shown to the player.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The answer options in catalogue order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option within [`Self::options`].
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

/// Difficulty level of a quiz play-through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// All levels in menu order.
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Player-facing label. Frozen: the persisted score keys are derived
    /// from these strings, so changing a label would orphan saved scores.
    pub fn display_name(self) -> &'static str {
        match self {
            Level::Easy => "Easy Level",
            Level::Medium => "Medium Level",
            Level::Hard => "Hard Level",
        }
    }

    /// Key under which this level's best score is persisted.
    ///
    /// Derived from the display name (lowercased, spaces removed) with the
    /// `quizResult_` prefix, matching the keys written by earlier releases.
    pub fn storage_key(self) -> String {
        format!(
            "{}{}",
            SCORE_KEY_PREFIX,
            self.display_name().to_lowercase().replace(' ', "")
        )
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            other => Err(format!(
                "unknown level '{other}', expected easy, medium or hard"
            )),
        }
    }
}

/// Returns the fixed, ordered question list for a level.
///
/// Never empty; repeated calls return the identical sequence.
pub fn questions_for(level: Level) -> &'static [Question] {
    match level {
        Level::Easy => &EASY_QUESTIONS,
        Level::Medium => &MEDIUM_QUESTIONS,
        Level::Hard => &HARD_QUESTIONS,
    }
}

static EASY_QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new(
            "Which country won the FIFA World Cup in 2018?",
            &["France", "Croatia"],
            0,
        ),
        Question::new(
            "How many players are on the field per team?",
            &["11", "10"],
            0,
        ),
        Question::new(
            "What is the name of the ball used in a match?",
            &["Football", "Handball"],
            0,
        ),
        Question::new(
            "Which part of the body can't touch the ball (except the goalkeeper)?",
            &["Hands", "Feet"],
            0,
        ),
        Question::new(
            "Where does a penalty kick take place?",
            &["Penalty area", "Corner"],
            0,
        ),
        Question::new(
            "What color card means a player is sent off?",
            &["Red", "Yellow"],
            0,
        ),
        Question::new(
            "How long is a regular football match?",
            &["90 minutes", "60 minutes"],
            0,
        ),
        Question::new(
            "Which country hosts the Premier League?",
            &["England", "Germany"],
            0,
        ),
        Question::new(
            "What is scored when the ball crosses the goal line?",
            &["Goal", "Foul"],
            0,
        ),
        Question::new(
            "Who wears gloves on the field?",
            &["Goalkeeper", "Striker"],
            0,
        ),
    ]
});

static MEDIUM_QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new("Who won the UEFA Euro 2020?", &["Italy", "England"], 0),
        Question::new(
            "Which player is known as 'CR7'?",
            &["Cristiano Ronaldo", "Neymar"],
            0,
        ),
        Question::new(
            "What is the max number of substitutions allowed (regular time)?",
            &["5", "7"],
            0,
        ),
        Question::new(
            "Which club has the most UEFA Champions League titles?",
            &["Real Madrid", "Barcelona"],
            0,
        ),
        Question::new(
            "How many points is a win worth in league play?",
            &["3", "2"],
            0,
        ),
        Question::new(
            "Who hosts El Clásico?",
            &["Real Madrid & Barcelona", "PSG & Marseille"],
            0,
        ),
        Question::new(
            "Which nation won the first ever World Cup (1930)?",
            &["Uruguay", "Argentina"],
            0,
        ),
        Question::new("Where is Bayern Munich from?", &["Germany", "Spain"], 0),
        Question::new(
            "Who can score with a header?",
            &["Any player", "Only defenders"],
            0,
        ),
        Question::new(
            "What is VAR used for?",
            &["Reviewing decisions", "Measuring speed"],
            0,
        ),
    ]
});

static HARD_QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new(
            "Which goalkeeper has the most clean sheets in EPL history?",
            &["Petr Čech", "David De Gea"],
            0,
        ),
        Question::new(
            "Who scored the 'Hand of God' goal?",
            &["Maradona", "Pelé"],
            0,
        ),
        Question::new(
            "Which club is nicknamed 'The Old Lady'?",
            &["Juventus", "AC Milan"],
            0,
        ),
        Question::new(
            "In which year did Lionel Messi join PSG?",
            &["2021", "2022"],
            0,
        ),
        Question::new(
            "Which African country reached the World Cup semi-final in 2022?",
            &["Morocco", "Senegal"],
            0,
        ),
        Question::new(
            "Who won the Ballon d'Or in 2023?",
            &["Lionel Messi", "Erling Haaland"],
            0,
        ),
        Question::new(
            "Which stadium is home to Manchester United?",
            &["Old Trafford", "Etihad Stadium"],
            0,
        ),
        Question::new(
            "Who is Brazil's all-time top scorer (as of 2023)?",
            &["Neymar", "Ronaldo"],
            0,
        ),
        Question::new(
            "Which team did Erling Haaland play for before Man City?",
            &["Borussia Dortmund", "Ajax"],
            0,
        ),
        Question::new(
            "Who is known as 'The Egyptian King'?",
            &["Mohamed Salah", "Riyad Mahrez"],
            0,
        ),
    ]
});
