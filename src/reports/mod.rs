use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use ffrstats::stats::level::SkippedRecord;
use ffrstats::stats::pending::PendingLevel;

pub fn print_pending_table(levels: &[PendingLevel]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("D").add_attribute(Attribute::Bold),
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for level in levels {
        table.add_row(vec![
            Cell::new(level.rating),
            Cell::new(level.rank),
            Cell::new(&level.name),
        ]);
    }
    println!("{}", table);
    println!("{} levels without rank 1", levels.len());
}

/// Skipped rows go to stderr so they never mix into the report body.
pub fn print_skipped(title: &str, skipped: &[SkippedRecord]) {
    if skipped.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Skipped ({})", title)).add_attribute(Attribute::Bold),
        Cell::new("Level"),
        Cell::new("Reason"),
    ]);

    for s in skipped {
        table.add_row(vec![
            Cell::new(s.index + 1),
            Cell::new(&s.level),
            Cell::new(&s.reason),
        ]);
    }
    eprintln!("\n{}", table);
}
