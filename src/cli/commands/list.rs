use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Question;
use crate::ui::messages::warning;
use crate::utils::colors::colorize_label;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { category, limit } = cmd {
        let outcome = load_dataset(cfg)?;
        let base = cfg.load_options().data_dir.canonicalize()?;

        let selected: Vec<(usize, &Question)> = outcome
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| category.as_ref().is_none_or(|c| q.record.category == *c))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        if selected.is_empty() {
            warning("No questions match.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("category"),
            Column::left("attribute"),
            Column::left("l2"),
            Column::left("answer"),
            Column::left("image"),
        ]);

        for (i, q) in selected {
            table.add_row(vec![
                (i + 1).to_string(),
                colorize_label(&q.record.category),
                colorize_label(&q.record.attribute),
                colorize_label(&q.record.l2_category),
                q.record.answer.clone(),
                relative_image(&q.image, &base),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

fn relative_image(image: &Path, base: &Path) -> String {
    image
        .strip_prefix(base)
        .unwrap_or(image)
        .display()
        .to_string()
}
