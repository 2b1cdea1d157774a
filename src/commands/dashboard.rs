//! Dashboard commands behind the CLI subcommands.
//!
//! Two commands:
//! - `list_profiles`: one summary row per sample profile
//! - `show_dashboard`: rendered dashboard (or JSON) for one profile

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use serde::Serialize;
use thiserror::Error;

use crate::analysis::analyze;
use crate::dashboard::render::render_dashboard;
use crate::dashboard::{Dashboard, View};
use crate::data::{find_profile, profiles, DataError};

/// One row of the profile listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub name: &'static str,
    pub tests: usize,
    pub abnormal: usize,
}

pub fn list_profiles() -> Vec<ProfileSummary> {
    profiles()
        .iter()
        .map(|profile| ProfileSummary {
            name: profile.name,
            tests: profile.tests.len(),
            abnormal: analyze(&profile.tests).abnormal_values.len(),
        })
        .collect()
}

/// Profile listing as a table, abnormal counts highlighted.
pub fn render_profile_list(summaries: &[ProfileSummary], color: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Profile", "Tests", "Abnormal"]);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    for summary in summaries {
        let abnormal = if summary.abnormal > 0 {
            Cell::new(summary.abnormal)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(summary.abnormal).fg(Color::Green)
        };
        table.add_row(vec![Cell::new(summary.name), Cell::new(summary.tests), abnormal]);
    }
    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.to_string()
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Output format for `show_dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text { color: bool },
    Json,
}

pub fn show_dashboard(
    profile_name: &str,
    view: View,
    format: OutputFormat,
) -> Result<String, CommandError> {
    let profile = find_profile(profile_name)?;
    let dashboard = Dashboard::build(profile);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&dashboard)?),
        OutputFormat::Text { color } => Ok(render_dashboard(&dashboard, view, color)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_listed_with_counts() {
        let summaries = list_profiles();
        assert_eq!(summaries.len(), 6);
        assert_eq!(summaries[0].name, "Normal Sample");
        assert_eq!(summaries[0].tests, 25);
        assert_eq!(summaries[0].abnormal, 1);
        let kidney = summaries.iter().find(|s| s.name == "Kidney Problem").unwrap();
        assert_eq!(kidney.abnormal, 5);
    }

    #[test]
    fn profile_table_lists_names() {
        let text = render_profile_list(&list_profiles(), false);
        for name in crate::data::profile_names() {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = show_dashboard("Pregnancy", View::All, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, CommandError::Data(DataError::UnknownProfile { .. })));
        assert!(err.to_string().starts_with("Unknown profile 'Pregnancy'"));
    }

    #[test]
    fn json_output_carries_analysis() {
        let json = show_dashboard("Diabetes", View::All, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"], "Diabetes");
        let abnormal = value["analysis"]["abnormal_values"].as_array().unwrap();
        let names: Vec<&str> = abnormal
            .iter()
            .map(|a| a["test_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["LDL", "Glucose", "HbA1c"]);
        assert_eq!(abnormal[1]["status"], "high");
    }

    #[test]
    fn text_output_renders_selected_view() {
        let text = show_dashboard(
            "Liver Problem",
            View::Abnormal,
            OutputFormat::Text { color: false },
        )
        .unwrap();
        assert!(text.contains("Abnormal Results"));
        assert!(text.contains("ALT"));
        assert!(!text.contains("Complete Blood Count"));
    }
}
