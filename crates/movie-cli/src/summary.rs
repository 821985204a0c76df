use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use movie_cli::pipeline::QueryOutput;
use movie_common::format_numeric;

use crate::types::NormalizeResult;

pub fn print_normalize_summary(result: &NormalizeResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let report = &result.report;
    if !report.discarded_columns.is_empty() {
        println!("Discarded columns: {}", report.discarded_columns.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Kept"),
        Cell::new(report.output_rows)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    for (reason, count) in &report.dropped_by_reason {
        table.add_row(vec![
            dim_cell(format!("  dropped: {reason}")),
            count_cell(*count, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Dropped")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.dropped_rows, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_query_output(output: &QueryOutput) {
    let rows: Vec<(&str, String)> = match output {
        QueryOutput::Month(result) => vec![
            ("Month", result.month.clone()),
            ("Movies", result.count.to_string()),
        ],
        QueryOutput::Weekday(result) => vec![
            ("Weekday", result.weekday.clone()),
            ("Movies", result.count.to_string()),
        ],
        QueryOutput::Franchise(result) => vec![
            ("Franchise", result.franchise.clone()),
            ("Movies", result.count.to_string()),
            ("Total revenue", format_numeric(result.total_revenue)),
            ("Average revenue", format_numeric(result.average_revenue)),
        ],
        QueryOutput::Country(result) => vec![
            ("Country", result.country.clone()),
            ("Movies", result.count.to_string()),
        ],
        QueryOutput::Company(result) => vec![
            ("Company", result.company.clone()),
            ("Total revenue", format_numeric(result.total_revenue)),
            ("Movies", result.count.to_string()),
        ],
        QueryOutput::Return(result) => vec![
            ("Title", result.title.clone()),
            ("Investment", format_numeric(result.investment)),
            ("Revenue", format_numeric(result.revenue)),
            ("Return", format_numeric(result.return_ratio)),
            ("Year", result.year.to_string()),
        ],
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), Cell::new(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
}

/// Print an English to Spanish label table.
pub fn print_labels(kind: &str, labels: &[(&str, &str)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(kind), header_cell("Label")]);
    apply_table_style(&mut table);
    for (english, label) in labels {
        table.add_row(vec![dim_cell(english), Cell::new(label)]);
    }
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
