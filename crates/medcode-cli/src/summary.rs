use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medcode_cli::types::{
    ExtractResult, MatchBackResult, MatchCodesResult, MultipleChoiceResult, OntologyResult,
    WrittenFile,
};

pub fn print_extract_summary(result: &ExtractResult) {
    println!("Datasource: {}", result.datasource.display());
    println!("Output: {}", result.output_dir.display());
    println!("Participants: {}", result.participants);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Columns"),
        header_cell("Answered"),
        header_cell("Candidates"),
        header_cell("Anonymized"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_identified = 0usize;
    let mut total_anonymized = 0usize;
    for question in &result.questions {
        total_identified += question.identified_rows;
        total_anonymized += question.anonymized_rows;
        table.add_row(vec![
            Cell::new(&question.column).add_attribute(Attribute::Bold),
            Cell::new(question.source_columns),
            Cell::new(question.answered),
            count_cell(question.identified_rows, Color::Green),
            count_cell(question.anonymized_rows, Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_identified).add_attribute(Attribute::Bold),
        Cell::new(total_anonymized).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if result.questions.is_empty() {
        eprintln!("No question had a usable answer; nothing was written.");
    }
}

pub fn print_match_codes_summary(result: &MatchCodesResult) {
    println!("Scored rows: {}", result.scored_rows);
    println!("Rainbow table entries: {}", result.rainbow_entries);
    let mut table = files_table();
    for (layout, file) in [("long", &result.long), ("wide", &result.wide)] {
        if let Some(file) = file {
            table.add_row(file_row(layout, file));
        }
    }
    println!("{table}");
    if result.uncoded > 0 {
        eprintln!(
            "{} scored row(s) matched an ontology term without an ATC code.",
            result.uncoded
        );
    }
}

pub fn print_match_back_summary(result: &MatchBackResult) {
    println!("Identified rows: {}", result.identified_rows);
    println!("Coded rows: {}", result.coded_rows);
    let mut table = files_table();
    table.add_row(file_row("matched", &result.output));
    println!("{table}");
}

pub fn print_multiple_choice_summary(result: &MultipleChoiceResult) {
    println!("Hardcoded entries: {}", result.entries);
    let mut table = files_table();
    table.add_row(file_row("selections", &result.output));
    println!("{table}");
    if !result.missing_columns.is_empty() {
        eprintln!("Columns missing from the datasource:");
        for column in &result.missing_columns {
            eprintln!("- {column}");
        }
    }
}

pub fn print_ontology_summary(result: &OntologyResult) {
    println!("Ontology records: {}", result.records);
    let mut table = files_table();
    table.add_row(file_row("rainbow table", &result.rainbow));
    table.add_row(vec![
        Cell::new("turtle").add_attribute(Attribute::Bold),
        path_cell(&result.turtle),
        count_cell(result.statements, Color::Green),
    ]);
    println!("{table}");
}

fn files_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Path"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn file_row(label: &str, file: &WrittenFile) -> Vec<Cell> {
    vec![
        Cell::new(label).add_attribute(Attribute::Bold),
        path_cell(&file.path),
        count_cell(file.rows, Color::Green),
    ]
}

fn path_cell(path: &Path) -> Cell {
    Cell::new(path.display())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
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

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
