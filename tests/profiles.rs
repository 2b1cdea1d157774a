//! End-to-end checks of the analyzer over the built-in sample profiles.

use blood_beacon_lib::analysis::{ALL_NORMAL_EXPLANATION, EXPLANATION_PREAMBLE};
use blood_beacon_lib::data::find_profile;
use blood_beacon_lib::models::enums::AbnormalStatus;
use blood_beacon_lib::{analyze, try_analyze, AnalysisResult};

fn analyze_profile(name: &str) -> AnalysisResult {
    let profile = find_profile(name).expect("profile exists");
    try_analyze(&profile.tests).expect("sample data is well formed")
}

fn flagged(result: &AnalysisResult) -> Vec<(&str, AbnormalStatus)> {
    result
        .abnormal_values
        .iter()
        .map(|a| (a.test_name.as_str(), a.status))
        .collect()
}

#[test]
fn normal_sample_only_flags_ldl() {
    let result = analyze_profile("Normal Sample");
    assert_eq!(flagged(&result), vec![("LDL", AbnormalStatus::High)]);
    assert_eq!(result.affected_organs, vec!["Liver", "Cardiovascular System"]);
    assert_eq!(
        result.explanation,
        format!(
            "{EXPLANATION_PREAMBLE}LDL (high: May indicate increased risk of cardiovascular disease.)"
        )
    );
}

#[test]
fn liver_problem() {
    let result = analyze_profile("Liver Problem");
    assert_eq!(
        flagged(&result),
        vec![
            ("ALT", AbnormalStatus::High),
            ("AST", AbnormalStatus::High),
            ("ALP", AbnormalStatus::High),
            ("LDL", AbnormalStatus::High),
        ]
    );
    assert_eq!(
        result.affected_organs,
        vec![
            "Liver",
            "Heart",
            "Muscles",
            "Bones",
            "Gallbladder",
            "Cardiovascular System",
        ]
    );
}

#[test]
fn kidney_problem() {
    let result = analyze_profile("Kidney Problem");
    assert_eq!(
        flagged(&result),
        vec![
            ("Creatinine", AbnormalStatus::High),
            ("BUN", AbnormalStatus::High),
            ("eGFR", AbnormalStatus::Low),
            ("Potassium", AbnormalStatus::High),
            ("LDL", AbnormalStatus::High),
        ]
    );
    assert_eq!(
        result.affected_organs,
        vec![
            "Kidneys",
            "Muscles",
            "Liver",
            "Adrenal Glands",
            "Heart",
            "Cardiovascular System",
        ]
    );
    assert!(result.explanation.contains(
        "Creatinine (high: May indicate kidney dysfunction or reduced kidney blood flow.)"
    ));
    assert!(result.explanation.contains(
        "eGFR (low: Value is below the normal reference range. This may require clinical correlation.)"
    ));
}

#[test]
fn anemia() {
    let result = analyze_profile("Anemia");
    assert_eq!(
        flagged(&result),
        vec![
            ("Hemoglobin", AbnormalStatus::Low),
            ("Hematocrit", AbnormalStatus::Low),
            ("Red Blood Cells", AbnormalStatus::Low),
            ("LDL", AbnormalStatus::High),
        ]
    );
    assert!(result.explanation.starts_with(
        "Based on the abnormal values, there may be issues with: \
         Hemoglobin (low: May indicate anemia, blood loss, or nutritional deficiencies.); "
    ));
    assert!(result.affected_organs.contains(&"Spleen".to_string()));
}

#[test]
fn diabetes_keeps_panel_order() {
    let result = analyze_profile("Diabetes");
    assert_eq!(
        flagged(&result),
        vec![
            ("LDL", AbnormalStatus::High),
            ("Glucose", AbnormalStatus::High),
            ("HbA1c", AbnormalStatus::High),
        ]
    );
    assert_eq!(
        result.affected_organs,
        vec![
            "Liver",
            "Cardiovascular System",
            "Pancreas",
            "Adrenal Glands",
            "Red Blood Cells",
        ]
    );
}

#[test]
fn hypothyroidism_joins_fragments_in_order() {
    let result = analyze_profile("Hypothyroidism");
    let fragments: Vec<&str> = result
        .explanation
        .strip_prefix(EXPLANATION_PREAMBLE)
        .expect("preamble")
        .split("; ")
        .collect();
    assert_eq!(
        fragments,
        vec![
            "LDL (high: May indicate increased risk of cardiovascular disease.)",
            "TSH (high: May indicate hypothyroidism (underactive thyroid).)",
            "Free T4 (low: Value is below the normal reference range. \
             This may require clinical correlation.)",
        ]
    );
}

#[test]
fn in_range_panel_is_all_normal() {
    let mut tests = find_profile("Normal Sample").unwrap().tests.clone();
    for test in &mut tests {
        if test.name == "LDL" {
            test.value = 100.0;
        }
    }
    let result = analyze(&tests);
    assert!(result.is_all_normal());
    assert!(result.affected_organs.is_empty());
    assert_eq!(result.explanation, ALL_NORMAL_EXPLANATION);
}

#[test]
fn analysis_can_run_from_many_threads() {
    let tests = find_profile("Kidney Problem").unwrap().tests.clone();
    let expected = analyze(&tests);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| analyze(&tests))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
