use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::enums::AbnormalStatus;

/// Notes for one test, one per direction.
#[derive(Debug, Clone, Copy)]
struct DirectionalNote {
    high: &'static str,
    low: &'static str,
}

impl DirectionalNote {
    const fn new(high: &'static str, low: &'static str) -> Self {
        Self { high, low }
    }

    fn pick(&self, status: AbnormalStatus) -> &'static str {
        match status {
            AbnormalStatus::High => self.high,
            AbnormalStatus::Low => self.low,
        }
    }
}

/// Used for any test without a specific note.
const DEFAULT_NOTE: DirectionalNote = DirectionalNote::new(
    "Value is above the normal reference range. This may require clinical correlation.",
    "Value is below the normal reference range. This may require clinical correlation.",
);

static NOTES: &[(&str, DirectionalNote)] = &[
    (
        "Hemoglobin",
        DirectionalNote::new(
            "May indicate polycythemia, dehydration, or lung disease.",
            "May indicate anemia, blood loss, or nutritional deficiencies.",
        ),
    ),
    (
        "Hematocrit",
        DirectionalNote::new(
            "May indicate polycythemia, dehydration, or lung disease.",
            "May indicate anemia, blood loss, or fluid overload.",
        ),
    ),
    (
        "Red Blood Cells",
        DirectionalNote::new(
            "May indicate polycythemia, dehydration, or lung disease.",
            "May indicate anemia, blood loss, or bone marrow disorders.",
        ),
    ),
    (
        "White Blood Cells",
        DirectionalNote::new(
            "May indicate infection, inflammation, or certain types of leukemia.",
            "May indicate bone marrow disorders, autoimmune conditions, or severe infections.",
        ),
    ),
    (
        "Platelets",
        DirectionalNote::new(
            "May indicate inflammation, infection, or bone marrow disorders.",
            "May indicate immune disorders, bone marrow problems, or increased platelet destruction.",
        ),
    ),
    (
        "ALT",
        DirectionalNote::new(
            "May indicate liver damage, hepatitis, or medication effect.",
            "Rarely clinically significant.",
        ),
    ),
    (
        "AST",
        DirectionalNote::new(
            "May indicate liver damage, heart issues, or muscle injury.",
            "Rarely clinically significant.",
        ),
    ),
    (
        "ALP",
        DirectionalNote::new(
            "May indicate liver or bone disorders, or bile duct obstruction.",
            "May indicate malnutrition or zinc deficiency.",
        ),
    ),
    (
        "Creatinine",
        DirectionalNote::new(
            "May indicate kidney dysfunction or reduced kidney blood flow.",
            "May indicate decreased muscle mass or malnutrition.",
        ),
    ),
    (
        "BUN",
        DirectionalNote::new(
            "May indicate kidney dysfunction, dehydration, or high protein diet.",
            "May indicate liver disease, malnutrition, or overhydration.",
        ),
    ),
    (
        "Glucose",
        DirectionalNote::new(
            "May indicate diabetes, stress response, or certain medications.",
            "May indicate excess insulin, liver disease, or adrenal insufficiency.",
        ),
    ),
    (
        "Sodium",
        DirectionalNote::new(
            "May indicate dehydration, certain medications, or hormonal conditions.",
            "May indicate overhydration, heart failure, kidney or liver disease.",
        ),
    ),
    (
        "Potassium",
        DirectionalNote::new(
            "May indicate kidney dysfunction, medication effects, or cell damage.",
            "May indicate diarrhea, vomiting, or kidney issues that cause potassium loss.",
        ),
    ),
    (
        "Total Cholesterol",
        DirectionalNote::new(
            "May indicate increased risk of cardiovascular disease.",
            "May indicate malnutrition or certain genetic conditions.",
        ),
    ),
    (
        "LDL",
        DirectionalNote::new(
            "May indicate increased risk of cardiovascular disease.",
            "Generally considered beneficial.",
        ),
    ),
    (
        "HDL",
        DirectionalNote::new(
            "Generally considered beneficial for cardiovascular health.",
            "May indicate increased risk of cardiovascular disease.",
        ),
    ),
    (
        "Triglycerides",
        DirectionalNote::new(
            "May indicate increased risk of cardiovascular disease, diabetes, or liver disease.",
            "Generally not clinically significant.",
        ),
    ),
    (
        "TSH",
        DirectionalNote::new(
            "May indicate hypothyroidism (underactive thyroid).",
            "May indicate hyperthyroidism (overactive thyroid).",
        ),
    ),
];

static NOTE_INDEX: LazyLock<HashMap<&'static str, DirectionalNote>> =
    LazyLock::new(|| NOTES.iter().copied().collect());

/// Clinical note for a test in the given direction.
///
/// Tests without a specific note get the generic above/below text.
pub fn explain(test_name: &str, status: AbnormalStatus) -> &'static str {
    match NOTE_INDEX.get(test_name) {
        Some(note) => note.pick(status),
        None => default_explanation(status),
    }
}

pub fn default_explanation(status: AbnormalStatus) -> &'static str {
    DEFAULT_NOTE.pick(status)
}

pub fn has_specific_note(test_name: &str) -> bool {
    NOTE_INDEX.contains_key(test_name)
}
