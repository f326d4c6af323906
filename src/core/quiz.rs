//! Interactive quiz loop over any line-based input and text output.

use crate::core::image_probe::{ImageStatus, open_in_viewer, probe};
use crate::core::report::ScoreReport;
use crate::errors::{AppError, AppResult};
use crate::models::{Choice, Question};
use crate::session::QuizSession;
use crate::ui::messages::{error_line, warning_line};
use crate::ui::report::render_report;
use crate::utils::formatting::{bold, score_fraction, wrap};
use ansi_term::Colour;
use std::io::{BufRead, Write};

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Check each image before showing its question.
    pub probe_images: bool,
    /// Open each image in the system viewer.
    pub open_images: bool,
    /// Wrap width for long text, 0 disables wrapping.
    pub wrap_width: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            probe_images: true,
            open_images: false,
            wrap_width: 80,
        }
    }
}

pub struct QuizRunner<'a, R: BufRead, W: Write> {
    session: &'a mut QuizSession,
    input: R,
    out: W,
    opts: RunOptions,
}

impl<'a, R: BufRead, W: Write> QuizRunner<'a, R, W> {
    pub fn new(session: &'a mut QuizSession, input: R, out: W, opts: RunOptions) -> Self {
        Self {
            session,
            input,
            out,
            opts,
        }
    }

    /// Play until the quiz is complete and the user declines a restart.
    ///
    /// Returns the report of the last finished pass. Running out of input in
    /// the middle of a question is [`AppError::InputClosed`].
    pub fn run(&mut self) -> AppResult<ScoreReport> {
        loop {
            while let Some(question) = self.session.current().cloned() {
                self.render_question(&question)?;

                let choices = self.session.choices();
                let key = self.ask_choice(&choices)?;
                let submission = self.session.submit(&key)?;

                if submission.correct {
                    writeln!(self.out, "{}", Colour::Green.bold().paint("Correct!"))?;
                } else {
                    writeln!(
                        self.out,
                        "{} (answer: {})",
                        Colour::Red.bold().paint("Wrong"),
                        submission.expected
                    )?;
                }
                writeln!(self.out)?;
            }

            let report = self.session.report();
            write!(self.out, "{}", render_report(&report))?;

            if self.session.total() == 0 || !self.ask_restart()? {
                self.out.flush()?;
                return Ok(report);
            }

            self.session.reset();
            writeln!(self.out)?;
        }
    }

    fn render_question(&mut self, q: &Question) -> AppResult<()> {
        let state = self.session.state();
        let number = state.index + 1;
        let score = score_fraction(state.score, self.session.total());
        let width = self.opts.wrap_width;

        writeln!(self.out, "{}  Score: {}", bold(&format!("Q{number}")), score)?;

        let record = &q.record;
        for text in [&record.description_moderate, &record.preference] {
            if !text.is_empty() {
                writeln!(self.out, "{}", bold(&wrap(text, width)))?;
            }
        }

        if self.opts.probe_images {
            match probe(&q.image) {
                ImageStatus::Ready { width: w, height: h } => {
                    writeln!(self.out, "Image: {} ({w}x{h})", q.image.display())?
                }
                ImageStatus::Unreadable(e) => writeln!(
                    self.out,
                    "{}",
                    error_line(format!("Couldn't load image: {}: {e}", q.image.display()))
                )?,
            }
        } else {
            writeln!(self.out, "Image: {}", q.image.display())?;
        }

        if self.opts.open_images
            && let Err(e) = open_in_viewer(&q.image)
        {
            writeln!(self.out, "{}", warning_line(format!("Cannot open viewer: {e}")))?;
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            bold(&wrap(&format!("Q{number}. {}", record.question), width))
        )?;
        Ok(())
    }

    /// Read lines until one names a choice. Accepts the key in any case or
    /// the 1-based position in the list.
    fn ask_choice(&mut self, choices: &[Choice]) -> AppResult<String> {
        for (i, c) in choices.iter().enumerate() {
            if c.key == c.text {
                writeln!(self.out, "  {}) {}", i + 1, c.text)?;
            } else {
                writeln!(self.out, "  {}) {}", c.key, c.text)?;
            }
        }

        loop {
            write!(self.out, "Select an option: ")?;
            self.out.flush()?;

            let line = self.read_line()?.ok_or(AppError::InputClosed)?;
            let picked = line.trim();
            if picked.is_empty() {
                continue;
            }

            if let Some(choice) = parse_choice(picked, choices) {
                return Ok(choice.key.clone());
            }

            let keys: Vec<&str> = choices.iter().map(|c| c.key.as_str()).collect();
            writeln!(
                self.out,
                "{}",
                warning_line(format!(
                    "'{picked}' is not an option, pick one of {} or 1-{}",
                    keys.join(", "),
                    choices.len()
                ))
            )?;
        }
    }

    fn ask_restart(&mut self) -> AppResult<bool> {
        write!(self.out, "\nRestart quiz? [y/N]: ")?;
        self.out.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}

/// Match user input against a choice list by key (any case) or 1-based number.
pub fn parse_choice<'c>(input: &str, choices: &'c [Choice]) -> Option<&'c Choice> {
    let input = input.trim();

    if let Some(c) = choices.iter().find(|c| c.key.eq_ignore_ascii_case(input)) {
        return Some(c);
    }

    input
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .and_then(|n| choices.get(n - 1))
}
