// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Validate an export destination before any answer is collected.
///
/// - the path must be absolute (after `~` expansion)
/// - a missing file is fine
/// - an existing file needs `force` or a `y` read from `input`
pub(crate) fn prepare_output<R: BufRead>(file: &str, force: bool, input: &mut R) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }

    if path.is_dir() {
        return Err(AppError::Export(format!(
            "output path is a directory: {}",
            path.display()
        )));
    }

    confirm_overwrite(&path, force, input)?;
    Ok(path)
}

fn confirm_overwrite<R: BufRead>(path: &Path, force: bool, input: &mut R) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        )),
    }
}
