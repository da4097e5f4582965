//! Error types for the calculator input boundary
//!
//! The metrics engine itself never fails; these errors only surface when
//! raw text from a form or command line is turned into typed input.

use thiserror::Error;

/// Errors raised while parsing calculator input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Unknown unit system: {0} (expected metric or imperial)")]
    UnknownUnitSystem(String),

    #[error("Unknown gender: {0} (expected male or female)")]
    UnknownGender(String),

    #[error("Unknown activity level: {0}")]
    UnknownActivityLevel(String),
}
