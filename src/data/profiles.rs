use std::sync::LazyLock;

use serde::Serialize;

use crate::models::{ReferenceRange, TestResult};

use super::DataError;

/// A named sample panel.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tests: Vec<TestResult>,
}

/// (id, name, value, unit, min, max, category)
type BaselineRow = (&'static str, &'static str, f64, &'static str, f64, f64, &'static str);

/// Mostly normal panel every profile starts from.
static BASELINE: &[BaselineRow] = &[
    // Complete Blood Count
    ("hgb", "Hemoglobin", 14.5, "g/dL", 12.0, 16.0, "cbc"),
    ("hct", "Hematocrit", 43.0, "%", 36.0, 46.0, "cbc"),
    ("rbc", "Red Blood Cells", 4.8, "million/µL", 4.2, 5.4, "cbc"),
    ("wbc", "White Blood Cells", 5.5, "thousand/µL", 4.5, 11.0, "cbc"),
    ("plt", "Platelets", 250.0, "thousand/µL", 150.0, 450.0, "cbc"),
    // Liver Function Tests
    ("alt", "ALT", 28.0, "U/L", 7.0, 56.0, "lft"),
    ("ast", "AST", 24.0, "U/L", 8.0, 48.0, "lft"),
    ("alp", "ALP", 110.0, "U/L", 45.0, 115.0, "lft"),
    ("bilirubin", "Bilirubin", 0.8, "mg/dL", 0.1, 1.2, "lft"),
    ("albumin", "Albumin", 4.0, "g/dL", 3.4, 5.4, "lft"),
    // Kidney Function Tests
    ("creatinine", "Creatinine", 0.9, "mg/dL", 0.6, 1.2, "kft"),
    ("bun", "BUN", 15.0, "mg/dL", 7.0, 20.0, "kft"),
    ("egfr", "eGFR", 105.0, "mL/min/1.73m²", 90.0, 120.0, "kft"),
    // Electrolytes
    ("sodium", "Sodium", 140.0, "mmol/L", 135.0, 145.0, "electrolytes"),
    ("potassium", "Potassium", 4.2, "mmol/L", 3.5, 5.1, "electrolytes"),
    ("chloride", "Chloride", 102.0, "mmol/L", 98.0, 107.0, "electrolytes"),
    ("calcium", "Calcium", 9.5, "mg/dL", 8.5, 10.2, "electrolytes"),
    // Lipid Profile
    ("total_chol", "Total Cholesterol", 195.0, "mg/dL", 125.0, 200.0, "lipids"),
    ("ldl", "LDL", 128.0, "mg/dL", 0.0, 100.0, "lipids"),
    ("hdl", "HDL", 45.0, "mg/dL", 40.0, 60.0, "lipids"),
    ("triglycerides", "Triglycerides", 150.0, "mg/dL", 0.0, 150.0, "lipids"),
    // Glucose Metabolism
    ("glucose", "Glucose", 95.0, "mg/dL", 70.0, 99.0, "glucose"),
    ("hba1c", "HbA1c", 5.5, "%", 4.0, 5.6, "glucose"),
    // Thyroid Function
    ("tsh", "TSH", 2.5, "mIU/L", 0.4, 4.0, "thyroid"),
    ("ft4", "Free T4", 1.2, "ng/dL", 0.8, 1.8, "thyroid"),
];

/// Profile name and the values it changes, keyed by test name.
static PROFILE_OVERRIDES: &[(&str, &[(&str, f64)])] = &[
    ("Normal Sample", &[]),
    ("Liver Problem", &[("ALT", 85.0), ("AST", 78.0), ("ALP", 130.0)]),
    (
        "Kidney Problem",
        &[
            ("Creatinine", 2.1),
            ("BUN", 28.0),
            ("eGFR", 55.0),
            ("Potassium", 5.5),
        ],
    ),
    // Iron is not on the baseline panel, so its override never applies.
    (
        "Anemia",
        &[
            ("Hemoglobin", 10.5),
            ("Hematocrit", 32.0),
            ("Red Blood Cells", 3.9),
            ("Iron", 40.0),
        ],
    ),
    ("Diabetes", &[("Glucose", 185.0), ("HbA1c", 7.8)]),
    ("Hypothyroidism", &[("TSH", 7.8), ("Free T4", 0.6)]),
];

static PROFILES: LazyLock<Vec<Profile>> = LazyLock::new(|| {
    PROFILE_OVERRIDES
        .iter()
        .map(|&(name, overrides)| Profile {
            name,
            tests: apply_overrides(overrides),
        })
        .collect()
});

/// A fresh copy of the baseline panel.
pub fn baseline() -> Vec<TestResult> {
    BASELINE
        .iter()
        .map(|&(id, name, value, unit, min, max, category_id)| TestResult {
            id: id.into(),
            name: name.into(),
            value,
            unit: unit.into(),
            reference_range: ReferenceRange::new(min, max),
            category_id: category_id.into(),
        })
        .collect()
}

fn apply_overrides(overrides: &[(&str, f64)]) -> Vec<TestResult> {
    let mut tests = baseline();
    for test in &mut tests {
        if let Some((_, value)) = overrides.iter().find(|(name, _)| *name == test.name) {
            test.value = *value;
        }
    }
    tests
}

pub fn profiles() -> &'static [Profile] {
    &PROFILES
}

pub fn profile_names() -> impl Iterator<Item = &'static str> {
    PROFILE_OVERRIDES.iter().map(|(name, _)| *name)
}

/// Look up a profile by exact name.
pub fn find_profile(name: &str) -> Result<&'static Profile, DataError> {
    profiles()
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| DataError::UnknownProfile {
            name: name.to_string(),
            available: profile_names().collect::<Vec<_>>().join(", "),
        })
}
