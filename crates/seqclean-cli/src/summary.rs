use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use seqclean_model::RejectionReason;

use crate::types::RunResult;

/// Rejected accessions shown as examples in the summary.
const EXAMPLE_LIMIT: usize = 10;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Rejection report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    if result.headers > 0 {
        table.add_row(vec![Cell::new("FASTA headers"), Cell::new(result.headers)]);
    }
    table.add_row(vec![
        Cell::new("Unique accessions"),
        Cell::new(result.total_accessions),
    ]);
    table.add_row(vec![
        Cell::new("Accepted"),
        count_cell(result.report.accepted, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Rejected (local filter)"),
        count_cell(count_reason(result, RejectionReason::MalformedPattern), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Rejected (confirmed invalid)"),
        count_cell(count_reason(result, RejectionReason::ConfirmedInvalid), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Rejected (individual failure)"),
        count_cell(count_reason(result, RejectionReason::IndividualFailure), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Whole-batch remote calls"),
        Cell::new(result.report.batch_calls),
    ]);
    table.add_row(vec![
        Cell::new("Individual remote calls"),
        Cell::new(result.report.single_calls),
    ]);
    table.add_row(vec![
        Cell::new("Batches fallen back"),
        Cell::new(result.report.fallback_batches),
    ]);
    if let Some(rewrite) = &result.rewrite {
        table.add_row(vec![Cell::new("Records kept"), Cell::new(rewrite.kept)]);
        table.add_row(vec![
            Cell::new("Records removed"),
            count_cell(rewrite.removed, Color::Yellow),
        ]);
    }
    println!("{table}");

    print_rejected_examples(result);
}

fn print_rejected_examples(result: &RunResult) {
    if result.report.rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rejected accession"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for (accession, reason) in result.report.rejected.iter().take(EXAMPLE_LIMIT) {
        table.add_row(vec![Cell::new(accession), reason_cell(*reason)]);
    }
    println!();
    let shown = result.report.rejected.len().min(EXAMPLE_LIMIT);
    println!("Rejected ({} of {}):", shown, result.report.rejected.len());
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_reason(result: &RunResult, reason: RejectionReason) -> usize {
    result
        .report
        .rejected
        .values()
        .filter(|r| **r == reason)
        .count()
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn reason_cell(reason: RejectionReason) -> Cell {
    match reason {
        RejectionReason::MalformedPattern => Cell::new("local filter").fg(Color::Yellow),
        RejectionReason::ConfirmedInvalid => Cell::new("confirmed invalid").fg(Color::Red),
        RejectionReason::IndividualFailure => Cell::new("individual failure").fg(Color::Red),
    }
}
