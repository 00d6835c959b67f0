//! Console output: run summary, skipped-row diagnostics and profile listing.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use banknorm_model::{DecimalConvention, LayoutProfile};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("{}", summary_table(result));
    let counts = result.conversion.skip_counts();
    if !counts.is_empty() {
        println!("{}", skip_reason_table(&counts));
    }
    for line in skip_lines(result) {
        eprintln!("{line}");
    }
}

/// Key/value overview of one run.
pub fn summary_table(result: &RunResult) -> Table {
    let conversion = &result.conversion;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_summary_table_style(&mut table);

    let profile = if result.detected {
        format!("{} (detected)", conversion.profile)
    } else {
        conversion.profile.clone()
    };
    table.add_row(vec![Cell::new("Input"), Cell::new(result.input.display())]);
    table.add_row(vec![Cell::new("Profile"), Cell::new(profile)]);
    table.add_row(vec![Cell::new("Header line"), Cell::new(conversion.header_line)]);
    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(conversion.records.len()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Rows skipped"),
        count_cell(conversion.skipped.len(), Color::Yellow),
    ]);
    let output = match &result.output {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run, nothing written"),
    };
    table.add_row(vec![Cell::new("Output"), output]);
    table
}

fn skip_reason_table(counts: &std::collections::BTreeMap<&'static str, usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Skip reason"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in counts {
        table.add_row(vec![Cell::new(kind), count_cell(*count, Color::Yellow)]);
    }
    table
}

/// One diagnostic line per skipped row, in source order.
pub fn skip_lines(result: &RunResult) -> Vec<String> {
    result
        .conversion
        .skipped
        .iter()
        .map(|skip| format!("skipped {skip}"))
        .collect()
}

/// Table of known profiles for `--list-profiles`.
pub fn profiles_table<'a>(profiles: impl IntoIterator<Item = &'a LayoutProfile>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Profile"),
        header_cell("Header"),
        header_cell("Decimal"),
        header_cell("Date formats"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.name).add_attribute(Attribute::Bold),
            Cell::new(&profile.header),
            Cell::new(decimal_label(profile.decimal)),
            Cell::new(profile.date_formats.join(" | ")),
            Cell::new(profile.description.as_deref().unwrap_or("-")),
        ]);
    }
    table
}

fn decimal_label(decimal: DecimalConvention) -> &'static str {
    match decimal {
        DecimalConvention::Dot => "1,234.56",
        DecimalConvention::Comma => "1.234,56",
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
