use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::quiz::{QuizRunner, RunOptions};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::session::QuizSession;
use crate::ui::messages::{info, warning};
use std::io;

/// Handle the `play` subcommand: run the quiz on stdin/stdout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Play {
        limit,
        open_images,
        no_probe,
        export,
        format,
        force,
    } = cmd
    {
        let outcome = load_dataset(cfg)?;
        let mut questions = outcome.questions;
        if let Some(n) = limit {
            questions.truncate(*n);
        }

        info(format!("Loaded {} questions", questions.len()));
        if !outcome.dropped.is_empty() {
            warning(format!(
                "{} rows skipped (image not found), run `check` for details",
                outcome.dropped.len()
            ));
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();

        // Ask about overwriting before the quiz reads any answer
        let target = match export {
            Some(file) => {
                let path = ExportLogic::prepare(file, *force, &mut input)?;
                let fmt = format
                    .or_else(|| ExportFormat::from_path(&path))
                    .unwrap_or(ExportFormat::Csv);
                Some((path, fmt))
            }
            None => None,
        };

        let opts = RunOptions {
            probe_images: cfg.probe_images && !*no_probe,
            open_images: cfg.open_images || *open_images,
            wrap_width: cfg.wrap_width,
        };

        let mut session = QuizSession::new(questions);
        let report = {
            let stdout = io::stdout();
            let mut runner = QuizRunner::new(&mut session, input, stdout.lock(), opts);
            runner.run()?
        };

        if let Some((path, fmt)) = target {
            ExportLogic::export(&report, &session.state().responses, fmt, &path)?;
        }
    }

    Ok(())
}
