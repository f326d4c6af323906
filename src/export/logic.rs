// src/export/logic.rs

use crate::core::report::ScoreReport;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::prepare_output;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::export::xlsx::export_xlsx;
use crate::models::ResponseEntry;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// High-level export of the final report.
pub struct ExportLogic;

impl ExportLogic {
    /// Check the destination up front. Confirmation, when needed, is read
    /// from `input` so it happens before the quiz consumes any line.
    pub fn prepare<R: BufRead>(file: &str, force: bool, input: &mut R) -> AppResult<PathBuf> {
        prepare_output(file, force, input)
    }

    /// Write `report` and its responses to `path` in `format`.
    pub fn export(
        report: &ScoreReport,
        responses: &[ResponseEntry],
        format: ExportFormat,
        path: &Path,
    ) -> AppResult<()> {
        let data = ReportExport::new(report, responses);

        match format {
            ExportFormat::Csv => export_csv(&data, path),
            ExportFormat::Json => export_json(&data, path),
            ExportFormat::Xlsx => export_xlsx(&data, path),
        }
    }
}
