pub mod enums;

pub use blood_test::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Non-finite value for {test}: {value}")]
    NonFiniteValue { test: String, value: f64 },

    #[error("Non-finite reference range bound for {test}")]
    NonFiniteBound { test: String },

    #[error("Inverted reference range for {test}: min {min} is above max {max}")]
    InvertedRange { test: String, min: f64, max: f64 },
}
