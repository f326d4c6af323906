pub mod check;
pub mod config;
pub mod init;
pub mod list;
pub mod play;

use crate::config::Config;
use crate::dataset::{LoadOutcome, load_questions};
use crate::errors::AppResult;

/// Load the configured dataset with the configured validation rules.
pub(crate) fn load_dataset(cfg: &Config) -> AppResult<LoadOutcome> {
    load_questions(&cfg.dataset_path(), &cfg.load_options())
}
