//! Fitness Calculator Shared Library
//!
//! The metrics engine behind the TDEE calculator: unit normalization,
//! BMR/TDEE/BMI/ideal weight formulas and the derived report. Used by the
//! WASM bindings for the browser form and by the `fitcalc` CLI.

pub mod errors;
pub mod health_metrics;
pub mod report;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use report::{format_kcal, Report};
pub use units::{to_cm, to_kg, HeightUnit, UnitSystem, WeightUnit};
pub use validation::{parse_age, parse_field, ValidationError};
