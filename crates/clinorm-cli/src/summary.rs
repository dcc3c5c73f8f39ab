use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clinorm_cli::batch::{BatchSummary, ColumnSummary};
use clinorm_normalization::{WeightUnit, aliases_for};

/// Height tokens accepted by the height engine, grouped by meaning.
const HEIGHT_TOKENS: &[(&str, &str)] = &[
    ("feet", "'  ft  feet  foot"),
    ("inches", "\"  ''  in  ins  inch  inches"),
    ("centimeters", "cm  cms  centimeter  centimeters"),
    ("meters", "m  meter  meters"),
    ("composite separator", "'  ft  feet  foot  -"),
];

pub fn print_batch_summary(summary: &BatchSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Parsed"),
        header_cell("Blank"),
        header_cell("Failed"),
        header_cell("Failure kinds"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in [&summary.weight, &summary.height].into_iter().flatten() {
        table.add_row(column_row(column));
    }
    eprintln!("Rows: {}", summary.rows);
    eprintln!("{table}");
    if summary.advisories > 0 {
        eprintln!(
            "Warnings: {} weight(s) above the plausibility threshold",
            summary.advisories
        );
    }
}

fn column_row(column: &ColumnSummary) -> Vec<Cell> {
    let kinds = if column.failures.is_empty() {
        "-".to_string()
    } else {
        column
            .failures
            .iter()
            .map(|(kind, count)| format!("{kind}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    vec![
        Cell::new(&column.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        count_cell(column.parsed, Color::Green),
        dim_cell(column.blank),
        count_cell(column.failed(), Color::Red),
        Cell::new(kinds),
    ]
}

pub fn print_units() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Unit"),
        header_cell("Lbs per unit"),
        header_cell("Accepted spellings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for unit in WeightUnit::ALL {
        let aliases: Vec<&str> = aliases_for(unit).collect();
        table.add_row(vec![
            Cell::new(unit.key())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(unit.display_name()),
            Cell::new(unit.pounds_per_unit()),
            Cell::new(aliases.join("  ")),
        ]);
    }
    println!("Weight units (normalized to pounds):");
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![header_cell("Meaning"), header_cell("Tokens")]);
    apply_table_style(&mut table);
    for (meaning, tokens) in HEIGHT_TOKENS {
        table.add_row(vec![Cell::new(meaning), Cell::new(tokens)]);
    }
    println!();
    println!("Height tokens (normalized to feet and inches):");
    println!("{table}");
    println!("Bare numbers: 50-300 cm, 0.5-3 m, 3-8.5 decimal feet.");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
