//! Terminal rendering of the end-of-quiz breakdown.

use crate::core::report::{GroupAggregate, GroupField, ScoreReport};
use crate::ui::messages::header_line;
use crate::utils::colors::{color_for_accuracy, colorize, colorize_label};
use crate::utils::formatting::{bold, italic, percent, score_fraction};
use crate::utils::table::{Column, Table};

pub fn grouping_table(rows: &[GroupAggregate], field: GroupField) -> Table {
    let mut table = Table::new(vec![
        Column::left(field.title()),
        Column::right("correct"),
        Column::right("total"),
        Column::right("accuracy"),
    ]);

    for agg in rows {
        let acc = agg.accuracy();
        table.add_row(vec![
            colorize_label(&agg.label),
            agg.correct.to_string(),
            agg.total.to_string(),
            colorize(&percent(acc), color_for_accuracy(acc)),
        ]);
    }

    table
}

pub fn render_report(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str(&header_line("Quiz Complete!"));
    out.push_str("\n\n");
    out.push_str(&bold(&format!(
        "Your total score: {}",
        score_fraction(report.score, report.total)
    )));
    out.push('\n');

    for field in GroupField::ALL {
        out.push('\n');
        out.push_str(&bold(&format!("Score by {}", field.title())));
        out.push('\n');

        let table = grouping_table(report.grouping(field), field);
        if table.is_empty() {
            out.push_str(&italic("no answers recorded"));
            out.push('\n');
        } else {
            out.push_str(&table.render());
        }
    }

    out
}
