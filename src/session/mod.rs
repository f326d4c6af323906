//! Quiz session controller.
//!
//! The mutable part of a quiz lives in [`SessionState`], an explicit value the
//! controller owns. Nothing here touches the terminal, so a whole quiz can be
//! driven and checked from plain code.

use crate::core::report::ScoreReport;
use crate::errors::{AppError, AppResult};
use crate::models::{Choice, Question, ResponseEntry};
use serde::Serialize;

/// Progress of one user through the question list.
///
/// `responses.len() == index` and `score` equals the number of correct
/// responses after every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub index: usize,
    pub score: usize,
    pub responses: Vec<ResponseEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress { index: usize },
    Complete,
}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    /// The answer as recorded in the dataset.
    pub expected: String,
}

pub struct QuizSession {
    questions: Vec<Question>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            state: SessionState::default(),
        }
    }

    /// Resume from an existing state.
    ///
    /// The state must describe a real partial run: one response per answered
    /// question, never more responses than questions, and a score equal to
    /// the number of correct responses.
    pub fn with_state(questions: Vec<Question>, state: SessionState) -> AppResult<Self> {
        let answered = state.responses.len();
        let correct = state.responses.iter().filter(|r| r.correct).count();

        if answered > questions.len() {
            return Err(AppError::InvalidState(format!(
                "{answered} responses for {} questions",
                questions.len()
            )));
        }
        if state.index != answered {
            return Err(AppError::InvalidState(format!(
                "index {} does not match {answered} responses",
                state.index
            )));
        }
        if state.score != correct {
            return Err(AppError::InvalidState(format!(
                "score {} does not match {correct} correct responses",
                state.score
            )));
        }

        Ok(Self { questions, state })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.index < self.questions.len() {
            Phase::InProgress {
                index: self.state.index,
            }
        } else {
            Phase::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.state.index)
    }

    /// Options for the current question; empty once the quiz is complete.
    pub fn choices(&self) -> Vec<Choice> {
        self.current()
            .map(|q| Choice::for_record(&q.record))
            .unwrap_or_default()
    }

    /// Record the answer `key` for the current question and move on.
    ///
    /// An unknown key leaves the state untouched.
    pub fn submit(&mut self, key: &str) -> AppResult<Submission> {
        let question = self.current().ok_or(AppError::SessionComplete)?;
        let choices = Choice::for_record(&question.record);

        let selected = choices
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| AppError::InvalidChoice(key.to_string()))?;

        let record = &question.record;
        let answer = record.answer.as_str();
        let correct = if choices.iter().any(|c| c.key == answer) {
            selected.key == answer
        } else {
            selected.text == answer
        };

        let entry = ResponseEntry {
            category: record.category.clone(),
            attribute: record.attribute.clone(),
            l2: record.l2_category.clone(),
            correct,
        };
        let expected = answer.to_string();

        self.state.responses.push(entry);
        if correct {
            self.state.score += 1;
        }
        self.state.index += 1;

        Ok(Submission { correct, expected })
    }

    /// Breakdown of the responses recorded so far.
    pub fn report(&self) -> ScoreReport {
        ScoreReport::build(&self.state.responses, self.questions.len())
    }

    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }
}
