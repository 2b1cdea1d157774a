//! Built-in demo data: panel categories and the named sample profiles.
//!
//! Nothing here is user-supplied. Profiles are built once from a shared
//! baseline panel and handed out by reference.

pub mod categories;
pub mod profiles;

pub use categories::categories;
pub use profiles::{baseline, find_profile, profile_names, profiles, Profile};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Unknown profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },
}
