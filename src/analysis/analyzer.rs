use std::collections::HashSet;

use crate::models::{AbnormalResult, AnalysisResult, ModelError, TestResult};

use super::explanations::explain;
use super::organs::organs_for;

pub const ALL_NORMAL_EXPLANATION: &str = "All values are within normal reference ranges.";
pub const EXPLANATION_PREAMBLE: &str = "Based on the abnormal values, there may be issues with: ";

/// Analyze a panel: flag out-of-range values, collect implicated organs and
/// build the narrative explanation.
///
/// Entries with a non-finite value or bound cannot be classified; they are
/// skipped with a warning. Inverted ranges are classified as given and also
/// logged. Use [`try_analyze`] to reject such input instead.
pub fn analyze(tests: &[TestResult]) -> AnalysisResult {
    let abnormal_values: Vec<AbnormalResult> = tests
        .iter()
        .filter(|test| is_classifiable(test))
        .filter_map(AbnormalResult::from_test)
        .collect();

    let affected_organs = collect_organs(&abnormal_values);
    let explanation = build_explanation(&abnormal_values);

    tracing::debug!(
        tests = tests.len(),
        abnormal = abnormal_values.len(),
        organs = affected_organs.len(),
        "Blood test analysis complete"
    );

    AnalysisResult {
        abnormal_values,
        affected_organs,
        explanation,
    }
}

/// Like [`analyze`], but fails on the first entry that breaks the numeric
/// invariants (non-finite value or bound, `min > max`).
pub fn try_analyze(tests: &[TestResult]) -> Result<AnalysisResult, ModelError> {
    for test in tests {
        test.validate()?;
    }
    Ok(analyze(tests))
}

fn is_classifiable(test: &TestResult) -> bool {
    let classifiable = test.is_classifiable();
    if let Err(err) = test.validate() {
        if classifiable {
            tracing::warn!(test_id = %test.id, "{err}; classifying as given");
        } else {
            tracing::warn!(test_id = %test.id, "{err}; skipping");
        }
    }
    classifiable
}

/// Union of the organs for every abnormal test, first occurrence wins.
fn collect_organs(abnormal_values: &[AbnormalResult]) -> Vec<String> {
    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut organs = Vec::new();
    for abnormal in abnormal_values {
        for &organ in organs_for(&abnormal.test_name) {
            if seen.insert(organ) {
                organs.push(organ.to_string());
            }
        }
    }
    organs
}

fn build_explanation(abnormal_values: &[AbnormalResult]) -> String {
    if abnormal_values.is_empty() {
        return ALL_NORMAL_EXPLANATION.to_string();
    }

    let fragments: Vec<String> = abnormal_values
        .iter()
        .map(|abnormal| {
            format!(
                "{} ({}: {})",
                abnormal.test_name,
                abnormal.status,
                explain(&abnormal.test_name, abnormal.status),
            )
        })
        .collect();

    format!("{}{}", EXPLANATION_PREAMBLE, fragments.join("; "))
}
