use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use bids_model::{DatasetRecord, Diagnostic, DiagnosticSeverity, NOT_APPLICABLE};
use bids_report::Column;

use crate::types::ScanResult;

pub fn print_summary(result: &ScanResult) {
    for root in &result.roots {
        println!("Root: {}", root.display());
    }
    if let Some(outputs) = &result.outputs {
        println!("TSV: {}", outputs.tsv.display());
        println!("Markdown: {}", outputs.markdown.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Subjects"),
        header_cell("Sessions"),
        header_cell("Modalities"),
        header_cell("Tasks"),
        header_cell("Participants"),
        header_cell("Phenotype"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    let mut total_subjects = 0usize;
    for record in result.table.records() {
        total_subjects += record.nb_subjects;
        table.add_row(vec![
            Cell::new(&record.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(record.nb_subjects),
            text_cell(Column::Sessions.render(record)),
            text_cell(Column::Modalities.render(record)),
            tasks_cell(record),
            flag_cell(record.has_participant_tsv),
            flag_cell(record.has_phenotype_dir),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_subjects).add_attribute(Attribute::Bold),
        dim_cell(format!(
            "{} of {} candidates",
            result.table.len(),
            result.candidates
        )),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_diagnostic_table(result);
}

fn print_diagnostic_table(result: &ScanResult) {
    if result.diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for diagnostic in &result.diagnostics {
        table.add_row(vec![
            Cell::new(dataset_label(diagnostic)),
            severity_cell(diagnostic.severity()),
            Cell::new(diagnostic.code()),
            Cell::new(diagnostic.to_string()),
        ]);
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

fn dataset_label(diagnostic: &Diagnostic) -> String {
    diagnostic
        .dataset()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| diagnostic.dataset().display().to_string())
}

fn tasks_cell(record: &DatasetRecord) -> Cell {
    let rendered = Column::Tasks.render(record);
    if record.is_missing_tasks() {
        Cell::new("none found").fg(Color::Yellow)
    } else if rendered == NOT_APPLICABLE {
        dim_cell(rendered)
    } else {
        Cell::new(rendered)
    }
}

pub fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn text_cell(value: String) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(26)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(32)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: DiagnosticSeverity) -> Cell {
    match severity {
        DiagnosticSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
        DiagnosticSeverity::Info => dim_cell("INFO"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
