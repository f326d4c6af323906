use serde::Serialize;

/// Recorded outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEntry {
    pub category: String,
    pub attribute: String,
    pub l2: String,
    pub correct: bool,
}
