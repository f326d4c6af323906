use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config_path;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes a configuration file with default values. In test mode the file
/// is not written; the YAML is printed instead.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = config_path(cli);
    let cfg = Config::default();

    if cli.test {
        info("Test mode: configuration not written");
        println!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    cfg.save_to(&path)?;

    success(format!("Config file: {}", path.display()));
    info(format!("Dataset    : {}", cfg.dataset));
    info(format!("Images in  : {}", cfg.data_dir));
    Ok(())
}
