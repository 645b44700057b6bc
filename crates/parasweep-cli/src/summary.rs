use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use parasweep_engine::SweepOutcome;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_sweep_summary(outcome: &SweepOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Combinations"),
        Cell::new(outcome.combinations).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Artifacts written"),
        Cell::new(outcome.artifacts_written).set_alignment(CellAlignment::Right),
    ]);
    let failures = outcome.restore_failures.len();
    let failure_cell = if failures > 0 {
        Cell::new(failures)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(failures).set_alignment(CellAlignment::Right)
    };
    table.add_row(vec![Cell::new("Restore failures"), failure_cell]);
    println!("{table}");
    for failure in &outcome.restore_failures {
        eprintln!("restore: {failure}");
    }
}
