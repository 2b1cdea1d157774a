use serde::Serialize;

use crate::models::AnalysisResult;

/// One tile on the organ panel and the tests it is drawn for.
#[derive(Debug, Clone, Serialize)]
pub struct OrganTile {
    pub name: &'static str,
    pub related_tests: &'static [&'static str],
}

/// The organ tiles the dashboard can highlight.
///
/// This list is curated separately from the analyzer's organ table and the
/// two disagree: several organs the analyzer reports (Spleen, Thyroid,
/// Pancreas, ...) have no tile here. Those are surfaced through
/// [`OrganPanel::unlisted_organs`] rather than dropped.
pub static ORGAN_TILES: &[OrganTile] = &[
    OrganTile {
        name: "Heart",
        related_tests: &[
            "Hemoglobin",
            "Hematocrit",
            "Potassium",
            "LDL",
            "HDL",
            "Triglycerides",
            "Total Cholesterol",
        ],
    },
    OrganTile {
        name: "Brain",
        related_tests: &["Sodium", "Glucose", "TSH"],
    },
    OrganTile {
        name: "Liver",
        related_tests: &["ALT", "AST", "ALP", "GGT", "Bilirubin", "Albumin", "Total Protein"],
    },
    OrganTile {
        name: "Lungs",
        related_tests: &["Hemoglobin", "Bicarbonate", "Oxygen Saturation"],
    },
    OrganTile {
        name: "Kidneys",
        related_tests: &["Creatinine", "BUN", "eGFR", "Sodium", "Potassium", "Uric Acid"],
    },
    OrganTile {
        name: "Stomach",
        related_tests: &["Vitamin B12", "Intrinsic Factor"],
    },
    OrganTile {
        name: "Bone Marrow",
        related_tests: &[
            "Hemoglobin",
            "Red Blood Cells",
            "White Blood Cells",
            "Platelets",
            "MCV",
            "MCH",
            "MCHC",
        ],
    },
    OrganTile {
        name: "Blood",
        related_tests: &[
            "Hemoglobin",
            "Hematocrit",
            "Red Blood Cells",
            "White Blood Cells",
            "Platelets",
        ],
    },
    OrganTile {
        name: "Muscles",
        related_tests: &["Creatinine", "AST", "Creatine Kinase"],
    },
    OrganTile {
        name: "Intestines",
        related_tests: &["Iron", "Vitamin B12", "Folate"],
    },
    OrganTile {
        name: "Large Intestine",
        related_tests: &["Fecal Occult Blood", "Calprotectin"],
    },
    OrganTile {
        name: "Immune System",
        related_tests: &["White Blood Cells", "CRP", "ESR"],
    },
];

/// Organ panel state for one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct OrganPanel {
    /// Tiles in panel order, with whether each one lights up.
    pub tiles: Vec<(&'static OrganTile, bool)>,
    /// Affected organs with no tile on the panel.
    pub unlisted: Vec<String>,
}

impl OrganPanel {
    pub fn build(analysis: &AnalysisResult) -> Self {
        let tiles = ORGAN_TILES
            .iter()
            .map(|tile| (tile, is_affected(analysis, tile.name)))
            .collect();
        let unlisted = Self::unlisted_organs(analysis);
        if !unlisted.is_empty() {
            tracing::debug!(
                organs = %unlisted.join(", "),
                "Affected organs have no tile on the organ panel"
            );
        }
        Self { tiles, unlisted }
    }

    /// Names of the tiles that light up, in panel order.
    pub fn highlighted(&self) -> Vec<&'static str> {
        self.tiles
            .iter()
            .filter(|(_, lit)| *lit)
            .map(|(tile, _)| tile.name)
            .collect()
    }

    /// Affected organs the panel has no tile for, in analysis order.
    pub fn unlisted_organs(analysis: &AnalysisResult) -> Vec<String> {
        analysis
            .affected_organs
            .iter()
            .filter(|organ| tile_for(organ).is_none())
            .cloned()
            .collect()
    }
}

pub fn tile_for(organ: &str) -> Option<&'static OrganTile> {
    ORGAN_TILES.iter().find(|tile| tile.name == organ)
}

fn is_affected(analysis: &AnalysisResult, organ: &str) -> bool {
    analysis.affected_organs.iter().any(|o| o == organ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::data::find_profile;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[test]
    fn twelve_tiles() {
        assert_eq!(ORGAN_TILES.len(), 12);
        assert!(tile_for("Spleen").is_none());
        assert!(tile_for("Large Intestine").is_some());
    }

    #[test]
    fn anemia_lights_blood_tiles_and_reports_spleen() {
        let analysis = analyze(&find_profile("Anemia").unwrap().tests);
        let panel = OrganPanel::build(&analysis);
        assert_eq!(
            panel.highlighted(),
            vec!["Heart", "Liver", "Lungs", "Kidneys", "Bone Marrow", "Blood"]
        );
        assert_eq!(panel.unlisted, vec!["Spleen", "Cardiovascular System"]);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unlisted_organs_are_not_warned_about() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let panel = tracing::subscriber::with_default(subscriber, || {
            let analysis = analyze(&find_profile("Normal Sample").unwrap().tests);
            OrganPanel::build(&analysis)
        });

        assert_eq!(panel.unlisted, vec!["Cardiovascular System"]);
        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn all_normal_panel_lights_nothing() {
        let analysis = analyze(&[]);
        let panel = OrganPanel::build(&analysis);
        assert!(panel.highlighted().is_empty());
        assert!(panel.unlisted.is_empty());
        assert_eq!(panel.tiles.len(), ORGAN_TILES.len());
    }
}
