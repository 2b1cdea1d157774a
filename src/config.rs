/// Application-level constants
pub const APP_NAME: &str = "Blood Beacon Insights";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Profile shown when none is selected.
pub const DEFAULT_PROFILE: &str = "Normal Sample";

pub const DISCLAIMER: &str =
    "For educational purposes only. Not intended for medical diagnosis.";

/// Log filter used when neither the CLI nor RUST_LOG sets one.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "blood_beacon_lib=debug,blood_beacon=debug"
    } else {
        "blood_beacon_lib=info,blood_beacon=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_exists() {
        assert!(crate::data::find_profile(DEFAULT_PROFILE).is_ok());
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_log_filter().starts_with("blood_beacon_lib="));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
