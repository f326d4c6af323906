// src/export/model.rs

use crate::core::report::{GroupField, ScoreReport};
use crate::models::ResponseEntry;
use chrono::Local;
use serde::Serialize;

/// One grouped aggregate, flattened for CSV / XLSX.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupRow {
    pub group: &'static str,
    pub label: String,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
}

/// Whole report as written to JSON.
#[derive(Serialize, Debug)]
pub struct ReportExport<'a> {
    pub generated_at: String,
    #[serde(flatten)]
    pub report: &'a ScoreReport,
    pub responses: &'a [ResponseEntry],
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a ScoreReport, responses: &'a [ResponseEntry]) -> Self {
        Self {
            generated_at: Local::now().to_rfc3339(),
            report,
            responses,
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["group", "label", "correct", "total", "accuracy"]
}

pub(crate) fn response_headers() -> Vec<&'static str> {
    vec!["#", "category", "attribute", "l2", "correct"]
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn rows_for(report: &ScoreReport, field: GroupField) -> Vec<GroupRow> {
    report
        .grouping(field)
        .iter()
        .map(|agg| GroupRow {
            group: field.key(),
            label: agg.label.clone(),
            correct: agg.correct,
            total: agg.total,
            accuracy: round1(agg.accuracy()),
        })
        .collect()
}

/// All three groupings, category first.
pub(crate) fn group_rows(report: &ScoreReport) -> Vec<GroupRow> {
    GroupField::ALL
        .iter()
        .flat_map(|f| rows_for(report, *f))
        .collect()
}

pub(crate) fn group_row_to_strings(r: &GroupRow) -> Vec<String> {
    vec![
        r.group.to_string(),
        r.label.clone(),
        r.correct.to_string(),
        r.total.to_string(),
        r.accuracy.to_string(),
    ]
}

pub(crate) fn response_to_strings(n: usize, r: &ResponseEntry) -> Vec<String> {
    vec![
        n.to_string(),
        r.category.clone(),
        r.attribute.clone(),
        r.l2.clone(),
        if r.correct { "yes" } else { "no" }.to_string(),
    ]
}
