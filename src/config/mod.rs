use crate::dataset::{LoadOptions, StrategyKind};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Question dataset (CSV with header row).
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Directory every image must live under.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Directory name each image path must pass through; empty disables the check.
    #[serde(default = "default_required_subdir")]
    pub required_subdir: String,
    /// Image lookup strategies, tried in order.
    #[serde(default = "default_strategies")]
    pub resolve_strategies: Vec<StrategyKind>,
    #[serde(default = "default_true")]
    pub remap_labels: bool,
    #[serde(default = "default_true")]
    pub probe_images: bool,
    #[serde(default)]
    pub open_images: bool,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_dataset() -> String {
    "dataset5.csv".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_required_subdir() -> String {
    "test".to_string()
}
fn default_strategies() -> Vec<StrategyKind> {
    vec![StrategyKind::Joined]
}
fn default_true() -> bool {
    true
}
fn default_wrap_width() -> usize {
    80
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            data_dir: default_data_dir(),
            required_subdir: default_required_subdir(),
            resolve_strategies: default_strategies(),
            remap_labels: true,
            probe_images: true,
            open_images: false,
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mmpbquiz")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mmpbquiz.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn dataset_path(&self) -> PathBuf {
        expand_tilde(&self.dataset)
    }

    /// Loader settings derived from this configuration.
    pub fn load_options(&self) -> LoadOptions {
        let sub = self.required_subdir.trim();
        LoadOptions {
            data_dir: expand_tilde(&self.data_dir),
            strategies: self.resolve_strategies.clone(),
            required_subdir: (!sub.is_empty()).then(|| sub.to_string()),
            remap_labels: self.remap_labels,
        }
    }
}
