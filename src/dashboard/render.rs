use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::config;
use crate::models::enums::Classification;
use crate::models::TestResult;

use super::{badge, range_position, Dashboard, View};

const BAR_WIDTH: usize = 12;
const INVALID_STATUS: &str = "invalid";

/// Render a whole dashboard as terminal text.
pub fn render_dashboard(dashboard: &Dashboard<'_>, view: View, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: Blood Test Analysis Dashboard", config::APP_NAME);
    let _ = writeln!(out, "Test Profile: {}", dashboard.profile);

    for (title, tests) in dashboard.sections(view) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{title}");
        if tests.is_empty() {
            let _ = writeln!(out, "  (no results)");
            continue;
        }
        let _ = writeln!(out, "{}", results_table(&tests, color));
    }

    let _ = writeln!(out);
    out.push_str(&render_summary(dashboard));
    let _ = writeln!(out);
    out.push_str(&render_organ_panel(dashboard, color));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", config::DISCLAIMER);
    out
}

fn results_table(tests: &[&TestResult], color: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Result"),
        header_cell("Reference Range"),
        header_cell("Status"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table, color);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for test in tests {
        let range = Cell::new(format!(
            "{} - {} {}",
            test.reference_range.min, test.reference_range.max, test.unit
        ));
        let row = match test.status() {
            Some(status) => vec![
                Cell::new(&test.name),
                Cell::new(format!("{} {}", test.value, test.unit)).fg(status_color(status)),
                range,
                Cell::new(status.as_str())
                    .fg(status_color(status))
                    .add_attribute(Attribute::Bold),
                Cell::new(range_bar(range_position(test))),
            ],
            None => vec![
                Cell::new(&test.name),
                dim_cell(format!("{} {}", test.value, test.unit)),
                range,
                dim_cell(INVALID_STATUS),
                dim_cell(""),
            ],
        };
        table.add_row(row);
    }
    table
}

/// The "Analysis Summary" panel.
pub fn render_summary(dashboard: &Dashboard<'_>) -> String {
    let analysis = &dashboard.analysis;
    let mut out = String::from("Analysis Summary\n");
    if analysis.is_all_normal() {
        out.push_str(
            "  All blood test values are within normal reference ranges. \
             No abnormalities detected.\n",
        );
        return out;
    }

    out.push_str("  Abnormal Values:\n");
    for abnormal in &analysis.abnormal_values {
        let _ = writeln!(out, "    • {}", badge(abnormal));
    }
    let _ = writeln!(
        out,
        "  Potentially Affected: {}",
        analysis.affected_organs.join(", ")
    );
    let _ = writeln!(out, "  Explanation: {}", analysis.explanation);
    out
}

/// The organ panel, lit tiles marked with `●`.
pub fn render_organ_panel(dashboard: &Dashboard<'_>, color: bool) -> String {
    let panel = &dashboard.organ_panel;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Organ"),
        header_cell(""),
        header_cell("Related Tests"),
    ]);
    apply_table_style(&mut table, color);
    align_column(&mut table, 1, CellAlignment::Center);

    for (tile, lit) in &panel.tiles {
        let (marker, name) = if *lit {
            (
                Cell::new("●").fg(Color::Red),
                Cell::new(tile.name).add_attribute(Attribute::Bold),
            )
        } else {
            (dim_cell("○"), dim_cell(tile.name))
        };
        table.add_row(vec![name, marker, Cell::new(tile.related_tests.join(", "))]);
    }

    let mut out = String::from("Organ Visualization\n");
    let _ = writeln!(out, "{table}");
    if !panel.unlisted.is_empty() {
        let _ = writeln!(
            out,
            "  Not shown on the organ panel: {}",
            panel.unlisted.join(", ")
        );
    }
    out
}

/// Text range bar with the value marker at `position` (0..=100).
pub fn range_bar(position: f64) -> String {
    let slot = ((position / 100.0) * (BAR_WIDTH - 1) as f64).round() as usize;
    let slot = slot.min(BAR_WIDTH - 1);
    (0..BAR_WIDTH)
        .map(|i| if i == slot { '●' } else { '─' })
        .collect()
}

fn status_color(status: Classification) -> Color {
    match status {
        Classification::Normal => Color::Green,
        Classification::Low => Color::Yellow,
        Classification::High => Color::Red,
    }
}

fn apply_table_style(table: &mut Table, color: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(110);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
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
    Cell::new(value).fg(Color::DarkGrey)
}
