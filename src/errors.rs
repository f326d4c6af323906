//! Unified application error type.
//! All modules (dataset, session, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Dataset
    // ---------------------------
    #[error("Cannot read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Image directory not found: {0}")]
    DataDir(PathBuf),

    // ---------------------------
    // Quiz session
    // ---------------------------
    #[error("The quiz is already complete")]
    SessionComplete,

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Inconsistent session state: {0}")]
    InvalidState(String),

    #[error("Input closed before the quiz was finished")]
    InputClosed,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
