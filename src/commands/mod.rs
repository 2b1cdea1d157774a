pub mod dashboard;

pub use dashboard::{
    list_profiles, render_profile_list, show_dashboard, CommandError, OutputFormat,
    ProfileSummary,
};
