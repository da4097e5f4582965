//! Form field parsing and range checks
//!
//! Parsing is lenient: a blank or unreadable field simply counts as absent,
//! the same way a cleared input box does. Range checks only produce feedback
//! for the user and never stop the metrics from being computed.

use crate::health_metrics::Measurement;
use crate::units::{HeightUnit, WeightUnit};

const MIN_WEIGHT_KG: f64 = 20.0;
const MAX_WEIGHT_KG: f64 = 500.0;
const MIN_HEIGHT_CM: f64 = 50.0;
const MAX_HEIGHT_CM: f64 = 300.0;

/// Parse a numeric form field, treating blank or non-numeric text as absent
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the age field as whole years
///
/// Fractional input is truncated; negative input is treated as absent.
pub fn parse_age(raw: &str) -> Option<u32> {
    parse_field(raw)
        .filter(|years| *years >= 0.0 && *years <= u32::MAX as f64)
        .map(|years| years.trunc() as u32)
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    validate_weight(weight_kg, WeightUnit::Kg)
}

/// Validate a weight already normalized to kg, quoting limits in `unit`
pub fn validate_weight(weight_kg: f64, unit: WeightUnit) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err(format!(
            "Weight must be at least {} {}",
            format_limit(unit.from_kg(MIN_WEIGHT_KG)),
            unit
        ));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!(
            "Weight must be at most {} {}",
            format_limit(unit.from_kg(MAX_WEIGHT_KG)),
            unit
        ));
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    validate_height(height_cm, HeightUnit::Cm)
}

/// Validate a height already normalized to cm, quoting limits in `unit`
pub fn validate_height(height_cm: f64, unit: HeightUnit) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < MIN_HEIGHT_CM {
        return Err(format!(
            "Height must be at least {} {}",
            format_limit(unit.from_cm(MIN_HEIGHT_CM)),
            unit
        ));
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err(format!(
            "Height must be at most {} {}",
            format_limit(unit.from_cm(MAX_HEIGHT_CM)),
            unit
        ));
    }
    Ok(())
}

/// One decimal place, dropped when it is zero (`20`, `44.1`)
fn format_limit(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Validate age in years
pub fn validate_age(age_years: u32) -> Result<(), String> {
    match age_years {
        0 => Err("Age must be at least 1 year".to_string()),
        age if age > 120 => Err("Age cannot exceed 120 years".to_string()),
        _ => Ok(()),
    }
}

/// Validate body fat percentage (0-100)
pub fn validate_body_fat_percent(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Body fat must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Body fat must be between 0 and 100%".to_string());
    }
    Ok(())
}

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Weight",
        "height" => "Height",
        "age" => "Age",
        "body_fat" => "Body Fat %",
        "activity" => "Activity Level",
        "unit" => "Unit System",
        "gender" => "Gender",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl Measurement {
    /// Range problems in the fields that are filled in
    ///
    /// Absent fields are not reported; the form is allowed to be incomplete.
    pub fn warnings(&self) -> Vec<ValidationError> {
        let mut warnings = Vec::new();

        if self.weight.is_some() {
            if let Err(msg) = validate_weight(self.weight_kg(), self.unit_system.weight_unit()) {
                warnings.push(ValidationError::new("weight", &msg));
            }
        }
        if self.height.is_some() {
            if let Err(msg) = validate_height(self.height_cm(), self.unit_system.height_unit()) {
                warnings.push(ValidationError::new("height", &msg));
            }
        }
        if let Some(age) = self.age_years {
            if let Err(msg) = validate_age(age) {
                warnings.push(ValidationError::new("age", &msg));
            }
        }
        if let Some(body_fat) = self.body_fat_percent {
            if let Err(msg) = validate_body_fat_percent(body_fat) {
                warnings.push(ValidationError::new("body_fat", &msg));
            }
        }

        warnings
    }
}
