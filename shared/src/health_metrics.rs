//! Metrics engine
//!
//! Turns the calculator form's [`Measurement`] into BMR, TDEE, BMI and ideal
//! weight. Everything here is a pure function of the measurement: nothing is
//! cached and evaluating the same measurement twice yields identical results.
//!
//! Incomplete input is represented with `Option` inside [`Assessment`]. The
//! flat [`MetricsSummary`] collapses those to the `0` / `"0"` values the
//! result panel renders while the form is still being filled in.

use crate::errors::InputError;
use crate::units::{self, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Height the ideal weight formula is anchored at (5 ft, in cm)
pub const IDEAL_WEIGHT_BASE_HEIGHT_CM: f64 = 152.4;

// ============================================================================
// Form Inputs
// ============================================================================

/// Gender selector, used only to pick the formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(InputError::UnknownGender(s.to_string())),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-2 days/week
    LightlyActive,
    /// Moderate exercise 3-4 days/week
    ModeratelyActive,
    /// Hard exercise 5-6 days/week
    VeryActive,
    /// Daily training or a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Every level, in the order the form lists them
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Look up the level a form multiplier value stands for
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - multiplier).abs() < 1e-9)
    }

    /// Label shown in the activity dropdown
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (1–2 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (3–4 days/week)",
            ActivityLevel::VeryActive => "Very active (5–6 days/week)",
            ActivityLevel::ExtraActive => "Extra active (daily or physical job)",
        }
    }

    /// Typical routine, as described in the reference table
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Desk job, minimal movement",
            ActivityLevel::LightlyActive => "1–2 workouts/week",
            ActivityLevel::ModeratelyActive => "3–4 workouts/week",
            ActivityLevel::VeryActive => "5–6 workouts/week",
            ActivityLevel::ExtraActive => "Daily training or physical labor",
        }
    }

    /// Short name used in the reference table
    pub fn name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = InputError;

    /// Accepts either a level name or one of the five multipliers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" | "heavy" => Ok(ActivityLevel::VeryActive),
            "extra_active" | "athlete" => Ok(ActivityLevel::ExtraActive),
            other => other
                .parse::<f64>()
                .ok()
                .and_then(ActivityLevel::from_multiplier)
                .ok_or_else(|| InputError::UnknownActivityLevel(s.to_string())),
        }
    }
}

/// One snapshot of the calculator form
///
/// Weight and height are in the units of `unit_system`. Absent fields are the
/// ones the user has not filled in (or cleared).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Measurement {
    pub unit_system: UnitSystem,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age_years: Option<u32>,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub body_fat_percent: Option<f64>,
}

impl Measurement {
    /// Weight in kilograms, 0 when absent
    pub fn weight_kg(&self) -> f64 {
        units::to_kg(self.weight, self.unit_system)
    }

    /// Height in centimeters, 0 when absent
    pub fn height_cm(&self) -> f64 {
        units::to_cm(self.height, self.unit_system)
    }

    /// Body fat percentage if it is usable for Katch-McArdle
    fn usable_body_fat(&self) -> Option<f64> {
        self.body_fat_percent
            .filter(|bf| bf.is_finite() && (0.0..=100.0).contains(bf))
    }

    /// Evaluate every metric this measurement supports
    pub fn assess(&self) -> Assessment {
        let weight_kg = self.weight_kg();
        let height_cm = self.height_cm();
        let has_body = is_positive(weight_kg) && is_positive(height_cm);

        let bmr = match self.age_years.filter(|age| *age > 0) {
            Some(age) if has_body => Some(match self.usable_body_fat() {
                Some(body_fat) => Bmr {
                    kcal: calculate_bmr_katch_mcardle(weight_kg, body_fat),
                    formula: BmrFormula::KatchMcArdle,
                },
                None => Bmr {
                    kcal: calculate_bmr_mifflin(weight_kg, height_cm, age, self.gender),
                    formula: BmrFormula::MifflinStJeor,
                },
            }),
            _ => None,
        };

        if let Some(bmr) = &bmr {
            debug!(formula = bmr.formula.name(), bmr = bmr.kcal, "computed BMR");
        }

        Assessment {
            weight_kg,
            height_cm,
            activity: self.activity,
            bmr,
            bmi: has_body.then(|| calculate_bmi(weight_kg, height_cm)),
            ideal_weight_kg: is_positive(height_cm)
                .then(|| calculate_ideal_weight(height_cm, self.gender)),
        }
    }

    /// Evaluate and flatten into the values the result panel renders
    pub fn summary(&self) -> MetricsSummary {
        self.assess().summary()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Formula a BMR value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor, used when body fat is unknown
    MifflinStJeor,
    /// Katch-McArdle, used when body fat % is provided
    #[serde(rename = "katch_mcardle")]
    KatchMcArdle,
}

impl BmrFormula {
    pub fn name(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "Mifflin–St Jeor",
            BmrFormula::KatchMcArdle => "Katch–McArdle",
        }
    }
}

/// Basal metabolic rate in kcal/day together with its formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmr {
    pub kcal: f64,
    pub formula: BmrFormula,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate BMR using Katch-McArdle equation
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
pub fn calculate_bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::SeverelyUnderweight
    } else if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

// ============================================================================
// Ideal Weight
// ============================================================================

/// Ideal body weight (Robinson-style, 0.91 kg per cm over 152.4 cm)
///
/// Men: 50 + 0.91 × (height - 152.4)
/// Women: 45.5 + 0.91 × (height - 152.4)
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> f64 {
    let over_base = height_cm - IDEAL_WEIGHT_BASE_HEIGHT_CM;
    match gender {
        Gender::Male => 50.0 + 0.91 * over_base,
        Gender::Female => 45.5 + 0.91 * over_base,
    }
}

// ============================================================================
// Results
// ============================================================================

/// Everything the engine could derive from one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    /// Requires weight, height and age
    pub bmr: Option<Bmr>,
    /// Requires weight and height
    pub bmi: Option<f64>,
    /// Requires height
    pub ideal_weight_kg: Option<f64>,
}

impl Assessment {
    /// Total Daily Energy Expenditure (BMR × activity multiplier)
    pub fn tdee(&self) -> Option<f64> {
        self.bmr.map(|bmr| bmr.kcal * self.activity.multiplier())
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi.map(classify_bmi)
    }

    /// Collapse into the panel values, using 0 / "0" for anything missing
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            bmr: self.bmr.map_or(0.0, |bmr| bmr.kcal),
            tdee: self.tdee().unwrap_or(0.0),
            bmi: self.bmi.map_or_else(|| "0".to_string(), format_one_decimal),
            ideal_weight: self
                .ideal_weight_kg
                .map_or_else(|| "0".to_string(), format_one_decimal),
        }
    }
}

/// Values handed to the result panel
///
/// BMR and TDEE stay numeric; the caller rounds and groups them for display.
/// BMI and ideal weight arrive pre-formatted to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub bmr: f64,
    pub tdee: f64,
    pub bmi: String,
    pub ideal_weight: String,
}

fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}
