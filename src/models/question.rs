use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the question dataset.
///
/// Every column is read as text; missing cells and absent optional columns
/// become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionRecord {
    pub image_path: String,
    pub description_moderate: String,
    pub preference: String,
    pub question: String,
    pub answer: String,
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
    pub category: String,
    pub attribute: String,
    #[serde(rename = "l2-category")]
    pub l2_category: String,
}

impl QuestionRecord {
    /// Lettered option texts in display order, paired with their key.
    pub fn lettered_options(&self) -> [(&'static str, &str); 4] {
        [
            ("A", self.a.as_str()),
            ("B", self.b.as_str()),
            ("C", self.c.as_str()),
            ("D", self.d.as_str()),
        ]
    }
}

/// A dataset row whose image has been resolved to an existing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub record: QuestionRecord,
    pub image: PathBuf,
}

impl Question {
    pub fn new(record: QuestionRecord, image: PathBuf) -> Self {
        Self { record, image }
    }
}
