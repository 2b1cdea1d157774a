//! Dashboard view model: what the results tabs, the summary panel and the
//! organ panel show for one sample profile.
//!
//! Everything here is derived from a profile plus its `AnalysisResult`;
//! drawing happens in [`render`].

pub mod organ_panel;
pub mod render;

use serde::Serialize;

use crate::analysis::analyze;
use crate::data::{categories, Profile};
use crate::models::enums::{str_enum, AbnormalStatus};
use crate::models::{AbnormalResult, AnalysisResult, Category, TestResult};

pub use organ_panel::{OrganPanel, OrganTile, ORGAN_TILES};

str_enum!(View {
    All => "all",
    Abnormal => "abnormal",
    Categories => "categories",
});

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All Blood Tests",
            Self::Abnormal => "Abnormal Results",
            Self::Categories => "By Category",
        }
    }
}

/// Tests belonging to one category, in panel order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a Category,
    pub tests: Vec<&'a TestResult>,
}

/// Everything the dashboard shows for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub profile: &'a str,
    pub tests: &'a [TestResult],
    pub analysis: AnalysisResult,
    pub organ_panel: OrganPanel,
}

impl<'a> Dashboard<'a> {
    pub fn build(profile: &'a Profile) -> Self {
        let analysis = analyze(&profile.tests);
        let organ_panel = OrganPanel::build(&analysis);
        tracing::info!(
            profile = profile.name,
            abnormal = analysis.abnormal_values.len(),
            "Dashboard built"
        );
        Self {
            profile: profile.name,
            tests: &profile.tests,
            analysis,
            organ_panel,
        }
    }

    /// Groups of tests to show for a tab.
    pub fn sections(&self, view: View) -> Vec<(String, Vec<&'a TestResult>)> {
        let tests: &'a [TestResult] = self.tests;
        match view {
            View::All => vec![(view.title().to_string(), tests.iter().collect())],
            View::Abnormal => vec![(view.title().to_string(), abnormal_only(tests))],
            View::Categories => group_by_category(tests)
                .into_iter()
                .map(|group| (group.category.name.clone(), group.tests))
                .collect(),
        }
    }
}

/// Results outside their reference range, in input order. Entries that
/// cannot be classified are left out, matching [`analyze`].
pub fn abnormal_only(tests: &[TestResult]) -> Vec<&TestResult> {
    tests
        .iter()
        .filter(|t| t.status().is_some_and(|status| !status.is_normal()))
        .collect()
}

/// Group by the known categories; empty groups and unknown ids are dropped.
pub fn group_by_category(tests: &[TestResult]) -> Vec<CategoryGroup<'_>> {
    categories()
        .iter()
        .map(|category| CategoryGroup {
            category,
            tests: tests
                .iter()
                .filter(|t| t.category_id == category.id)
                .collect(),
        })
        .filter(|group| !group.tests.is_empty())
        .collect()
}

/// Where the value marker sits on the range bar, as 0..=100.
pub fn range_position(test: &TestResult) -> f64 {
    let range = test.reference_range;
    let width = range.max - range.min;
    if width <= 0.0 {
        return if test.value <= range.min { 0.0 } else { 100.0 };
    }
    let position = (test.value - range.min) / width * 100.0;
    position.clamp(0.0, 100.0)
}

/// Badge text for the summary panel, e.g. "LDL: 128 mg/dL (High)".
pub fn badge(abnormal: &AbnormalResult) -> String {
    let label = match abnormal.status {
        AbnormalStatus::High => "High",
        AbnormalStatus::Low => "Low",
    };
    format!(
        "{}: {} {} ({})",
        abnormal.test_name, abnormal.value, abnormal.unit, label
    )
}
