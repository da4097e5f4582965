//! Fitness Calculator WASM Module
//!
//! Browser bindings for the TDEE calculator form. The page keeps the form
//! state and calls in here on every edit with the raw field text; results
//! come back as JSON strings ready for rendering.

use fitness_calc_shared::{
    self as shared, BmrFormula, Gender, Measurement, MetricsSummary, Report, UnitSystem,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Result panel payload
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PanelResult {
    #[serde(flatten)]
    summary: MetricsSummary,
    bmr_formula: Option<BmrFormula>,
    bmi_category: Option<&'static str>,
    tdee_display: String,
    bmr_display: String,
    warnings: Vec<String>,
}

/// Build a measurement from the form's field text
///
/// Blank or unreadable numeric fields count as absent. Unknown selector
/// values fall back to the form defaults (metric, male, sedentary).
fn measurement_from_form(
    unit: &str,
    weight: &str,
    height: &str,
    age: &str,
    gender: &str,
    activity: &str,
    body_fat: &str,
) -> Measurement {
    Measurement {
        unit_system: unit.parse().unwrap_or(UnitSystem::Metric),
        weight: shared::parse_field(weight),
        height: shared::parse_field(height),
        age_years: shared::parse_age(age),
        gender: gender.parse().unwrap_or(Gender::Male),
        activity: activity.parse().unwrap_or_default(),
        body_fat_percent: shared::parse_field(body_fat),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Compute BMR, TDEE, BMI and ideal weight for the current form state
#[wasm_bindgen]
pub fn compute_metrics(
    unit: &str,
    weight: &str,
    height: &str,
    age: &str,
    gender: &str,
    activity: &str,
    body_fat: &str,
) -> String {
    let measurement = measurement_from_form(unit, weight, height, age, gender, activity, body_fat);
    let assessment = measurement.assess();
    let summary = assessment.summary();

    to_json(&PanelResult {
        bmr_formula: assessment.bmr.map(|bmr| bmr.formula),
        bmi_category: assessment.bmi_category().map(|c| c.description()),
        tdee_display: shared::format_kcal(summary.tdee),
        bmr_display: shared::format_kcal(summary.bmr),
        warnings: measurement
            .warnings()
            .iter()
            .map(|w| w.user_message())
            .collect(),
        summary,
    })
}

/// Compute the full report (targets, activity table, macro plans)
#[wasm_bindgen]
pub fn compute_report(
    unit: &str,
    weight: &str,
    height: &str,
    age: &str,
    gender: &str,
    activity: &str,
    body_fat: &str,
) -> String {
    let measurement = measurement_from_form(unit, weight, height, age, gender, activity, body_fat);
    to_json(&Report::from_assessment(&measurement.assess()))
}

/// Convert a weight field to kilograms
#[wasm_bindgen]
pub fn to_kg(value: &str, unit: &str) -> f64 {
    shared::to_kg(shared::parse_field(value), unit.parse().unwrap_or_default())
}

/// Convert a height field to centimeters
#[wasm_bindgen]
pub fn to_cm(value: &str, unit: &str) -> f64 {
    shared::to_cm(shared::parse_field(value), unit.parse().unwrap_or_default())
}

/// Format kcal for display, e.g. `2,556`
#[wasm_bindgen]
pub fn format_kcal(value: f64) -> String {
    shared::format_kcal(value)
}
