// src/quiz_ui.rs - quiz screens as fixed-width colored pages

use crate::constants::ui::{PAGE_WIDTH, TITLE_WIDTH};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

// Constants for page appearance
const HEADER_BG: Color = Color::Blue;
const HEADER_FG: Color = Color::White;
const TITLE_BG: Color = Color::Green;
const SUBHEADER_FG: Color = Color::Green;
const PROMPT_FG: Color = Color::White;
const OPTION_FG: Color = Color::Cyan;
const LOCKED_FG: Color = Color::DarkGrey;
const CORRECT_FG: Color = Color::Green;
const WRONG_FG: Color = Color::Red;
const MESSAGE_FG: Color = Color::Yellow;
const FOOTER_EDGE_FG: Color = Color::Blue;
const FOOTER_FG: Color = Color::White;

/// Visual state of an answer option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Selectable; no answer locked in yet
    Open,
    /// Answer locked in elsewhere; this option is inert
    Locked,
    /// Revealed as the correct answer
    Correct,
    /// The player's wrong choice
    WrongChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizRow {
    /// Question text, wrapped to the page width
    Prompt(String),
    /// A numbered answer option
    Option {
        key: char,
        label: String,
        state: OptionState,
    },
    /// Centered highlight line (feedback, results)
    Message(String),
    /// Blank line
    Spacer,
}

/// One screen of the quiz: a header, content rows and a footer with the
/// active key bindings. Built per state change and rendered in one pass.
#[derive(Debug, Clone)]
pub struct QuizPage {
    title: String,
    subheader: String,
    rows: Vec<QuizRow>,
    controls: String,
    plain: bool,
}

impl QuizPage {
    pub fn new(title: &str, subheader: &str, plain: bool) -> Self {
        QuizPage {
            title: title.to_string(),
            subheader: subheader.to_string(),
            rows: Vec::new(),
            controls: String::new(),
            plain,
        }
    }

    pub fn add_prompt(&mut self, text: &str) {
        self.rows.push(QuizRow::Prompt(text.to_string()));
    }

    pub fn add_option(&mut self, key: char, label: &str, state: OptionState) {
        self.rows.push(QuizRow::Option {
            key,
            label: label.to_string(),
            state,
        });
    }

    pub fn add_message(&mut self, message: &str) {
        self.rows.push(QuizRow::Message(message.to_string()));
    }

    pub fn add_spacer(&mut self) {
        self.rows.push(QuizRow::Spacer);
    }

    pub fn set_controls(&mut self, controls: &str) {
        self.controls = controls.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subheader(&self) -> &str {
        &self.subheader
    }

    pub fn rows(&self) -> &[QuizRow] {
        &self.rows
    }

    pub fn controls(&self) -> &str {
        &self.controls
    }

    /// Whether a message row with exactly this text is on the page.
    pub fn has_message(&self, message: &str) -> bool {
        self.rows
            .iter()
            .any(|row| matches!(row, QuizRow::Message(m) if m == message))
    }

    fn fg<W: Write>(&self, out: &mut W, color: Color) -> std::io::Result<()> {
        if !self.plain {
            queue!(out, SetForegroundColor(color))?;
        }
        Ok(())
    }

    fn bg<W: Write>(&self, out: &mut W, color: Color) -> std::io::Result<()> {
        if !self.plain {
            queue!(out, SetBackgroundColor(color))?;
        }
        Ok(())
    }

    fn reset<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if !self.plain {
            queue!(out, ResetColor)?;
        }
        Ok(())
    }

    /// Renders the page into `out` in a single buffered pass and flushes.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        queue!(out, Clear(ClearType::All))?;

        // Header: title block on green, app banner on blue
        queue!(out, MoveTo(0, 0))?;
        self.bg(out, TITLE_BG)?;
        self.fg(out, HEADER_FG)?;
        queue!(
            out,
            Print(format!("{:<width$}", self.title, width = TITLE_WIDTH))
        )?;
        self.bg(out, HEADER_BG)?;
        queue!(
            out,
            Print(format!(
                "{:>width$}",
                "FOOTY TRIVIA",
                width = PAGE_WIDTH - TITLE_WIDTH
            ))
        )?;
        self.reset(out)?;

        // Subheader right under the header
        queue!(out, MoveTo(0, 1))?;
        self.fg(out, SUBHEADER_FG)?;
        queue!(
            out,
            Print(format!("{:<width$}", self.subheader, width = PAGE_WIDTH))
        )?;
        self.reset(out)?;

        // Content rows start one line below the subheader
        let mut current_y = 3u16;
        for row in &self.rows {
            match row {
                QuizRow::Prompt(text) => {
                    for line in wrap_text(text, PAGE_WIDTH) {
                        queue!(out, MoveTo(0, current_y))?;
                        self.fg(out, PROMPT_FG)?;
                        queue!(out, Print(line))?;
                        self.reset(out)?;
                        current_y += 1;
                    }
                }
                QuizRow::Option { key, label, state } => {
                    let color = match state {
                        OptionState::Open => OPTION_FG,
                        OptionState::Locked => LOCKED_FG,
                        OptionState::Correct => CORRECT_FG,
                        OptionState::WrongChoice => WRONG_FG,
                    };
                    let marker = match state {
                        OptionState::Correct => " ✓",
                        OptionState::WrongChoice => " ✗",
                        _ => "",
                    };
                    queue!(out, MoveTo(2, current_y))?;
                    self.fg(out, color)?;
                    queue!(out, Print(format!("{key}. {label}{marker}")))?;
                    self.reset(out)?;
                    current_y += 1;
                }
                QuizRow::Message(message) => {
                    queue!(out, MoveTo(0, current_y))?;
                    self.fg(out, MESSAGE_FG)?;
                    queue!(
                        out,
                        Print(format!("{:^width$}", message, width = PAGE_WIDTH))
                    )?;
                    self.reset(out)?;
                    current_y += 1;
                }
                QuizRow::Spacer => {
                    current_y += 1;
                }
            }
        }

        // Footer with the active key bindings
        current_y += 1;
        queue!(out, MoveTo(0, current_y))?;
        self.fg(out, FOOTER_EDGE_FG)?;
        queue!(out, Print("<<<"))?;
        self.fg(out, FOOTER_FG)?;
        queue!(
            out,
            Print(format!(
                "{:^width$}",
                self.controls,
                width = PAGE_WIDTH - 6
            ))
        )?;
        self.fg(out, FOOTER_EDGE_FG)?;
        queue!(out, Print(">>>"))?;
        self.reset(out)?;

        out.flush()
    }
}

/// Greedy word wrap to `width` columns. Words longer than the width get a
/// line of their own rather than being split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_keeps_short_lines_whole() {
        assert_eq!(wrap_text("Who wears gloves?", 50), vec!["Who wears gloves?"]);
    }

    #[test]
    fn test_wrap_text_breaks_at_word_boundaries() {
        let lines = wrap_text("Which part of the body can't touch the ball?", 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 20, "line too long: '{line}'");
        }
        assert_eq!(
            lines.join(" "),
            "Which part of the body can't touch the ball?"
        );
    }

    #[test]
    fn test_wrap_text_empty_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_page_collects_rows_in_order() {
        let mut page = QuizPage::new("EASY LEVEL", "QUESTION 1/10", true);
        page.add_prompt("Who wears gloves on the field?");
        page.add_spacer();
        page.add_option('1', "Goalkeeper", OptionState::Open);
        page.add_option('2', "Striker", OptionState::Open);
        page.set_controls("1-2=Answer b=Menu q=Quit");

        assert_eq!(page.title(), "EASY LEVEL");
        assert_eq!(page.subheader(), "QUESTION 1/10");
        assert_eq!(page.rows().len(), 4);
        assert_eq!(page.controls(), "1-2=Answer b=Menu q=Quit");
    }

    #[test]
    fn test_has_message_matches_exact_text() {
        let mut page = QuizPage::new("RESULT", "LEVEL COMPLETE", true);
        page.add_message("Your score: 7/10");
        assert!(page.has_message("Your score: 7/10"));
        assert!(!page.has_message("Your score"));
    }

    #[test]
    fn test_render_writes_page_content() {
        let mut page = QuizPage::new("EASY LEVEL", "QUESTION 1/10", true);
        page.add_prompt("Who wears gloves on the field?");
        page.add_option('1', "Goalkeeper", OptionState::Correct);
        page.add_option('2', "Striker", OptionState::WrongChoice);
        page.set_controls("Enter=Next");

        let mut buffer: Vec<u8> = Vec::new();
        page.render(&mut buffer).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();

        assert!(rendered.contains("FOOTY TRIVIA"));
        assert!(rendered.contains("Who wears gloves on the field?"));
        assert!(rendered.contains("1. Goalkeeper ✓"));
        assert!(rendered.contains("2. Striker ✗"));
        assert!(rendered.contains("Enter=Next"));
    }

    #[test]
    fn test_plain_render_skips_color_codes() {
        let build = |plain: bool| {
            let mut page = QuizPage::new("MENU", "CHOOSE YOUR LEVEL", plain);
            page.add_option('1', "Easy Level", OptionState::Open);
            page.set_controls("1-3=Play q=Quit");
            let mut buffer: Vec<u8> = Vec::new();
            page.render(&mut buffer).unwrap();
            String::from_utf8(buffer).unwrap()
        };

        let plain = build(true);
        let colored = build(false);

        // Same text, but the colored variant carries the SGR sequences
        assert!(plain.contains("1. Easy Level"));
        assert!(colored.contains("1. Easy Level"));
        assert!(colored.len() > plain.len());
    }
}
