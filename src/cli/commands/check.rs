use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;

/// Handle the `check` subcommand: load the dataset and explain what was dropped.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { show_dropped } = cmd {
        let opts = cfg.load_options();
        let outcome = load_dataset(cfg)?;

        header("Dataset check");
        info(format!("Dataset    : {}", cfg.dataset_path().display()));
        info(format!("Images in  : {}", opts.data_dir.display()));
        info(format!(
            "Strategies : {}",
            cfg.resolve_strategies
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        if let Some(sub) = &opts.required_subdir {
            info(format!("Subdir     : {sub}"));
        }

        success(format!(
            "Loaded {} of {} rows",
            outcome.questions.len(),
            outcome.total_rows()
        ));

        if outcome.dropped.is_empty() {
            return Ok(());
        }

        warning(format!("Dropped {} rows", outcome.dropped.len()));

        let mut by_reason: BTreeMap<&str, usize> = BTreeMap::new();
        for d in &outcome.dropped {
            *by_reason.entry(d.reason.kind()).or_default() += 1;
        }

        let mut reasons = Table::new(vec![Column::left("reason"), Column::right("rows")]);
        for (reason, n) in by_reason {
            reasons.add_row(vec![reason.to_string(), n.to_string()]);
        }
        print!("{}", reasons.render());

        if *show_dropped {
            println!();
            let mut rows = Table::new(vec![
                Column::right("row"),
                Column::left("image_path"),
                Column::left("reason"),
            ]);
            for d in &outcome.dropped {
                rows.add_row(vec![
                    d.row.to_string(),
                    d.image_path.clone(),
                    d.reason.to_string(),
                ]);
            }
            print!("{}", rows.render());
        }
    }

    Ok(())
}
