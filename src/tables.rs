use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::snapshot::Snapshot;

#[must_use]
pub fn build_snapshot_table(snapshot: &Snapshot) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Microverter", "Value"]);
    table.add_row(vec![
        Cell::new("Request URL"),
        Cell::new(&snapshot.url).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Logger #"), Cell::new(&snapshot.serial)]);
    table.add_row(vec![
        Cell::new("Wp now"),
        Cell::new(&snapshot.power).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("kW today"),
        Cell::new(&snapshot.energy_today).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("kW total"),
        Cell::new(&snapshot.energy_total).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("work days"),
        Cell::new(&snapshot.uptime).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Earn now"),
        Cell::new(format!("{:.2}", snapshot.earnings_now.0))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("today"),
        Cell::new(format!("{:.0}", snapshot.earnings_today.0)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("total"),
        Cell::new(format!("{:.0}", snapshot.earnings_total.0)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Fetched at").add_attribute(Attribute::Dim),
        Cell::new(snapshot.fetched_at.format("%H:%M:%S")).add_attribute(Attribute::Dim),
    ]);
    table
}
