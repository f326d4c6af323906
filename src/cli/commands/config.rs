use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config_path;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        edit_config,
        editor,
    } = &cli.command
    {
        let file = config_path(cli);

        if *path {
            println!("{}", file.display());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !file.exists() {
                cfg.save_to(&file)?;
            }
            edit(&file, editor.as_deref())?;
        }
    }

    Ok(())
}

/// Platform default: $EDITOR, $VISUAL, then nano/notepad.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, file: &Path) -> bool {
    Command::new(editor)
        .arg(file)
        .status()
        .is_ok_and(|s| s.success())
}

fn edit(file: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let editor = requested.unwrap_or(fallback.as_str());

    if launch(editor, file) {
        success(format!("Configuration file edited using '{}'", editor));
        return Ok(());
    }

    if editor == fallback {
        return Err(AppError::Config(format!("cannot run editor '{editor}'")));
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        editor, fallback
    ));

    if launch(&fallback, file) {
        success(format!("Configuration file edited using fallback '{}'", fallback));
        Ok(())
    } else {
        Err(AppError::Config(format!("cannot run editor '{fallback}'")))
    }
}
