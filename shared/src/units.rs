//! Unit systems and normalization into metric
//!
//! The calculator form accepts either metric (kg/cm) or imperial (lb/inch)
//! values. Every formula works in kilograms and centimeters, so input is
//! normalized once on the way in. The only conversion back out of metric is
//! for showing range limits in the unit the user typed.

use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Weight Units
// ============================================================================

/// Unit a weight field is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value * KG_PER_LB,
        }
    }

    /// Convert kilograms into this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lb => kg / KG_PER_LB,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Unit a height field is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inch,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inch => value * CM_PER_INCH,
        }
    }

    /// Convert centimeters into this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inch => cm / CM_PER_INCH,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inch => "inch",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Unit System
// ============================================================================

/// Unit system toggle on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lb,
        }
    }

    pub fn height_unit(&self) -> HeightUnit {
        match self {
            UnitSystem::Metric => HeightUnit::Cm,
            UnitSystem::Imperial => HeightUnit::Inch,
        }
    }

    /// Toggle label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (kg/cm)",
            UnitSystem::Imperial => "Imperial (lb/in)",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" | "kg" | "cm" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "lb" | "lbs" | "in" | "inch" => Ok(UnitSystem::Imperial),
            _ => Err(InputError::UnknownUnitSystem(s.to_string())),
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize an optional weight field into kilograms
///
/// An absent field yields 0, which downstream formulas read as "not yet
/// computable".
pub fn to_kg(value: Option<f64>, system: UnitSystem) -> f64 {
    value.map_or(0.0, |v| system.weight_unit().to_kg(v))
}

/// Normalize an optional height field into centimeters
pub fn to_cm(value: Option<f64>, system: UnitSystem) -> f64 {
    value.map_or(0.0, |v| system.height_unit().to_cm(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_imperial_conversions() {
        assert_eq!(to_kg(Some(1.0), UnitSystem::Imperial), 0.453592);
        assert_eq!(to_cm(Some(1.0), UnitSystem::Imperial), 2.54);

        // 154 lb / 69 in
        assert!((to_kg(Some(154.0), UnitSystem::Imperial) - 69.853).abs() < 0.001);
        assert!((to_cm(Some(69.0), UnitSystem::Imperial) - 175.26).abs() < 0.001);
    }

    #[test]
    fn test_absent_fields_normalize_to_zero() {
        assert_eq!(to_kg(None, UnitSystem::Metric), 0.0);
        assert_eq!(to_kg(None, UnitSystem::Imperial), 0.0);
        assert_eq!(to_cm(None, UnitSystem::Metric), 0.0);
        assert_eq!(to_cm(None, UnitSystem::Imperial), 0.0);
    }

    #[test]
    fn test_unit_system_units() {
        assert_eq!(UnitSystem::Metric.weight_unit(), WeightUnit::Kg);
        assert_eq!(UnitSystem::Metric.height_unit(), HeightUnit::Cm);
        assert_eq!(UnitSystem::Imperial.weight_unit().to_string(), "lb");
        assert_eq!(UnitSystem::Imperial.height_unit().to_string(), "inch");
    }

    #[test]
    fn test_unit_system_labels() {
        assert_eq!(UnitSystem::Metric.label(), "Metric (kg/cm)");
        assert_eq!(UnitSystem::Imperial.label(), "Imperial (lb/in)");
    }

    #[test]
    fn test_converting_back_for_display() {
        assert_eq!(WeightUnit::Kg.from_kg(20.0), 20.0);
        assert!((WeightUnit::Lb.from_kg(20.0) - 44.0925).abs() < 0.001);
        assert_eq!(HeightUnit::Cm.from_cm(50.0), 50.0);
        assert!((HeightUnit::Inch.from_cm(300.0) - 118.11).abs() < 0.001);
    }

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!(" lb ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!(
            "stone".parse::<UnitSystem>(),
            Err(InputError::UnknownUnitSystem("stone".to_string()))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Metric values pass through untouched
        #[test]
        fn prop_metric_identity(value in 0.0f64..1000.0) {
            prop_assert_eq!(to_kg(Some(value), UnitSystem::Metric), value);
            prop_assert_eq!(to_cm(Some(value), UnitSystem::Metric), value);
        }

        /// Property: A pound is always lighter than a kilogram, an inch longer than a centimeter
        #[test]
        fn prop_imperial_scaling(value in 1.0f64..1000.0) {
            prop_assert!(to_kg(Some(value), UnitSystem::Imperial) < value);
            prop_assert!(to_cm(Some(value), UnitSystem::Imperial) > value);
        }
    }
}
