use super::question::QuestionRecord;
use serde::Serialize;

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub key: String,
    pub text: String,
}

impl Choice {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }

    /// The binary fallback used when a question carries no lettered options.
    pub fn yes_no() -> Vec<Choice> {
        vec![Choice::new("Yes", "Yes"), Choice::new("No", "No")]
    }

    /// Choices for a record: the non-empty A..D options in order, otherwise Yes/No.
    /// Never returns an empty list.
    pub fn for_record(record: &QuestionRecord) -> Vec<Choice> {
        let lettered: Vec<Choice> = record
            .lettered_options()
            .into_iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(key, text)| Choice::new(key, text))
            .collect();

        if lettered.is_empty() {
            Self::yes_no()
        } else {
            lettered
        }
    }
}
