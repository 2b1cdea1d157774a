use std::sync::LazyLock;

use crate::models::Category;

static CATEGORY_TABLE: &[(&str, &str)] = &[
    ("cbc", "Complete Blood Count"),
    ("lft", "Liver Function Tests"),
    ("kft", "Kidney Function Tests"),
    ("electrolytes", "Electrolytes"),
    ("lipids", "Lipid Profile"),
    ("glucose", "Glucose Metabolism"),
    ("thyroid", "Thyroid Function"),
];

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    CATEGORY_TABLE
        .iter()
        .map(|(id, name)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
});

/// All panel categories in display order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}
