//! Abnormal-value analysis over a panel of blood-test results.
//!
//! Four parts, leaf to root:
//! 1. Evaluator: classifies one value against its reference range
//! 2. Organ table: which organs an abnormal test may implicate
//! 3. Explanations: a short clinical note per test and direction
//! 4. Analyzer: runs the three above over a whole panel

pub mod analyzer;
pub mod evaluator;
pub mod explanations;
pub mod organs;

pub use analyzer::{analyze, try_analyze, ALL_NORMAL_EXPLANATION, EXPLANATION_PREAMBLE};
pub use evaluator::classify;
pub use explanations::explain;
pub use organs::organs_for;
