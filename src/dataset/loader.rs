use crate::dataset::labels::remap_labels;
use crate::dataset::resolve::{Rejection, ResolverChain, StrategyKind};
use crate::errors::{AppError, AppResult};
use crate::models::{Question, QuestionRecord};
use std::io;
use std::path::{Path, PathBuf};

/// Columns without which a dataset cannot be used at all.
pub const REQUIRED_COLUMNS: &[&str] = &["image_path", "question", "answer"];

/// How a dataset is validated while it is loaded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub data_dir: PathBuf,
    pub strategies: Vec<StrategyKind>,
    pub required_subdir: Option<String>,
    pub remap_labels: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            strategies: vec![StrategyKind::Joined],
            required_subdir: Some("test".to_string()),
            remap_labels: true,
        }
    }
}

/// A row left out because its image could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based data row (the header is not counted).
    pub row: usize,
    pub image_path: String,
    pub reason: Rejection,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub questions: Vec<Question>,
    pub dropped: Vec<DroppedRow>,
}

impl LoadOutcome {
    pub fn total_rows(&self) -> usize {
        self.questions.len() + self.dropped.len()
    }
}

/// Load the dataset at `csv_path` and keep only rows with a resolvable image.
///
/// An unreadable or malformed file is an error. A row whose image cannot be
/// resolved is not: it is listed in [`LoadOutcome::dropped`].
pub fn load_questions(csv_path: &Path, opts: &LoadOptions) -> AppResult<LoadOutcome> {
    let chain = ResolverChain::new(
        &opts.data_dir,
        &opts.strategies,
        opts.required_subdir.as_deref(),
    )?;

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)
        .map_err(|source| AppError::DatasetRead {
            path: csv_path.to_path_buf(),
            source,
        })?;

    read_questions(reader, &chain, opts.remap_labels)
}

/// Same as [`load_questions`] over an already opened CSV reader.
pub fn read_questions<R: io::Read>(
    mut reader: csv::Reader<R>,
    chain: &ResolverChain,
    remap: bool,
) -> AppResult<LoadOutcome> {
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(AppError::MissingColumn(column.to_string()));
        }
    }

    let mut outcome = LoadOutcome::default();

    for (i, result) in reader.deserialize::<QuestionRecord>().enumerate() {
        let mut record = result?;

        match chain.resolve(&record.image_path) {
            Ok(image) => {
                if remap {
                    remap_labels(&mut record);
                }
                outcome.questions.push(Question::new(record, image));
            }
            Err(reason) => outcome.dropped.push(DroppedRow {
                row: i + 1,
                image_path: record.image_path,
                reason,
            }),
        }
    }

    Ok(outcome)
}
