// src/export/xlsx.rs

use crate::core::report::GroupField;
use crate::errors::{AppError, AppResult};
use crate::export::model::{
    ReportExport, get_headers, group_row_to_strings, response_headers, response_to_strings,
    rows_for,
};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: one styled sheet per grouping plus a "Responses" sheet.
pub(crate) fn export_xlsx(data: &ReportExport<'_>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    {
        let summary = workbook.add_worksheet();
        summary.set_name("Score").map_err(to_app_error)?;
        summary.write(0, 0, "score").map_err(to_app_error)?;
        summary
            .write(0, 1, data.report.score as f64)
            .map_err(to_app_error)?;
        summary.write(1, 0, "total").map_err(to_app_error)?;
        summary
            .write(1, 1, data.report.total as f64)
            .map_err(to_app_error)?;
        summary.write(2, 0, "generated_at").map_err(to_app_error)?;
        summary
            .write(2, 1, data.generated_at.as_str())
            .map_err(to_app_error)?;
        summary.set_column_width(0, 14).map_err(to_app_error)?;
        summary.set_column_width(1, 28).map_err(to_app_error)?;
    }

    for field in GroupField::ALL {
        let rows: Vec<Vec<String>> = rows_for(data.report, field)
            .iter()
            .map(group_row_to_strings)
            .collect();

        let sheet = workbook.add_worksheet();
        sheet.set_name(field.title()).map_err(to_app_error)?;
        write_sheet(sheet, &get_headers(), &rows, GROUP_NUMERIC_COLUMNS)?;
    }

    let responses: Vec<Vec<String>> = data
        .responses
        .iter()
        .enumerate()
        .map(|(i, r)| response_to_strings(i + 1, r))
        .collect();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Responses").map_err(to_app_error)?;
    write_sheet(sheet, &response_headers(), &responses, RESPONSE_NUMERIC_COLUMNS)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// correct, total, accuracy
const GROUP_NUMERIC_COLUMNS: &[usize] = &[2, 3, 4];
/// #
const RESPONSE_NUMERIC_COLUMNS: &[usize] = &[0];

/// Header row, banded data rows and auto column widths. Only the columns
/// listed in `numeric` are written as numbers; labels always stay text.
fn write_sheet(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
    numeric: &[usize],
) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    if rows.is_empty() {
        worksheet
            .write(1, 0, "No data available")
            .map_err(to_app_error)?;
    }

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, numeric.contains(&col), band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// Numeric columns are written as numbers (right aligned), everything else as text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    numeric: bool,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some(num) = numeric.then(|| s.parse::<f64>().ok()).flatten() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
    } else {
        worksheet
            .write_with_format(row, col, s, &base)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
