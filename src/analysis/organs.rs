use std::collections::HashMap;
use std::sync::LazyLock;

/// Organs each test may implicate when abnormal, in display order.
static ORGAN_ASSOCIATIONS: &[(&str, &[&str])] = &[
    // Complete Blood Count
    ("Hemoglobin", &["Bone Marrow", "Blood", "Heart", "Lungs"]),
    ("Hematocrit", &["Bone Marrow", "Blood", "Heart", "Lungs"]),
    ("Red Blood Cells", &["Bone Marrow", "Spleen", "Kidneys"]),
    ("White Blood Cells", &["Bone Marrow", "Immune System", "Infection Sites"]),
    ("Platelets", &["Bone Marrow", "Spleen"]),
    ("MCV", &["Bone Marrow"]),
    ("MCH", &["Bone Marrow"]),
    ("MCHC", &["Bone Marrow"]),
    // Liver function
    ("ALT", &["Liver"]),
    ("AST", &["Liver", "Heart", "Muscles"]),
    ("ALP", &["Liver", "Bones", "Gallbladder"]),
    ("GGT", &["Liver", "Biliary System"]),
    ("Bilirubin", &["Liver", "Gallbladder", "Red Blood Cells"]),
    ("Albumin", &["Liver", "Kidneys"]),
    ("Total Protein", &["Liver", "Kidneys", "Immune System"]),
    // Kidney function
    ("Creatinine", &["Kidneys", "Muscles"]),
    ("BUN", &["Kidneys", "Liver"]),
    ("eGFR", &["Kidneys"]),
    // Electrolytes
    ("Sodium", &["Kidneys", "Adrenal Glands"]),
    ("Potassium", &["Kidneys", "Adrenal Glands", "Heart"]),
    ("Chloride", &["Kidneys", "Lungs"]),
    ("Bicarbonate", &["Lungs", "Kidneys"]),
    ("Calcium", &["Parathyroid Glands", "Kidneys", "Bones"]),
    ("Magnesium", &["Kidneys", "Parathyroid Glands", "Intestines"]),
    ("Phosphate", &["Kidneys", "Parathyroid Glands", "Bones"]),
    // Lipids
    ("Total Cholesterol", &["Liver", "Cardiovascular System"]),
    ("LDL", &["Liver", "Cardiovascular System"]),
    ("HDL", &["Liver", "Cardiovascular System"]),
    ("Triglycerides", &["Liver", "Pancreas", "Cardiovascular System"]),
    // Glucose metabolism
    ("Glucose", &["Pancreas", "Liver", "Adrenal Glands"]),
    ("HbA1c", &["Red Blood Cells", "Pancreas"]),
    // Thyroid
    ("TSH", &["Pituitary Gland", "Thyroid"]),
    ("Free T4", &["Thyroid"]),
    ("Free T3", &["Thyroid"]),
    // Others
    ("CRP", &["Immune System", "Inflammation Sites"]),
    ("ESR", &["Immune System", "Inflammation Sites"]),
    ("Uric Acid", &["Kidneys", "Joints"]),
    ("Iron", &["Intestines", "Bone Marrow", "Liver"]),
    ("Ferritin", &["Liver", "Spleen", "Bone Marrow"]),
    ("Vitamin B12", &["Stomach", "Intestines", "Bone Marrow"]),
    ("Folate", &["Intestines", "Bone Marrow"]),
    ("Vitamin D", &["Skin", "Liver", "Kidneys"]),
];

static ORGAN_INDEX: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| ORGAN_ASSOCIATIONS.iter().copied().collect());

/// Organs a test may implicate, or an empty slice for an unmapped test.
///
/// Keys match exactly: "hemoglobin" is not "Hemoglobin".
pub fn organs_for(test_name: &str) -> &'static [&'static str] {
    ORGAN_INDEX.get(test_name).copied().unwrap_or(&[])
}

pub fn is_mapped(test_name: &str) -> bool {
    ORGAN_INDEX.contains_key(test_name)
}

/// Every mapped test name, in table order.
pub fn mapped_tests() -> impl Iterator<Item = &'static str> {
    ORGAN_ASSOCIATIONS.iter().map(|(name, _)| *name)
}
