//! Text and JSON rendering of calculator results

use anyhow::Result;
use fitness_calc_shared::{format_kcal, ActivityLevel, Measurement, Report};
use serde_json::json;
use std::fmt::Write;

/// Render the result panel for one measurement
pub fn render_metrics(measurement: &Measurement, as_json: bool) -> Result<String> {
    let assessment = measurement.assess();
    let summary = assessment.summary();

    if as_json {
        let value = json!({
            "bmr": summary.bmr,
            "tdee": summary.tdee,
            "bmi": summary.bmi,
            "idealWeight": summary.ideal_weight,
            "bmrFormula": assessment.bmr.map(|bmr| bmr.formula),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let weight_unit = measurement.unit_system.weight_unit();
    let mut out = String::new();
    writeln!(out, "Your Maintenance Calories: {} kcal/day", format_kcal(summary.tdee))?;
    writeln!(out, "  ≈ {} kcal/week", format_kcal(summary.tdee * 7.0))?;
    writeln!(out, "BMR:          {} kcal/day", format_kcal(summary.bmr))?;
    match assessment.bmi_category() {
        Some(category) => writeln!(out, "BMI:          {} ({})", summary.bmi, category.description())?,
        None => writeln!(out, "BMI:          {}", summary.bmi)?,
    }
    writeln!(out, "Ideal Weight: {} kg", summary.ideal_weight)?;
    if let Some(bmr) = assessment.bmr {
        writeln!(out, "Formula:      {}", bmr.formula.name())?;
    } else {
        writeln!(
            out,
            "Enter weight ({}), height ({}) and age to calculate BMR and TDEE.",
            weight_unit,
            measurement.unit_system.height_unit()
        )?;
    }
    writeln!(out, "Units:        {}", measurement.unit_system.label())?;
    writeln!(out, "Activity:     {}", measurement.activity.label())?;
    Ok(out)
}

/// Render the full report for one measurement
pub fn render_report(measurement: &Measurement, as_json: bool) -> Result<String> {
    let report = Report::from_assessment(&measurement.assess());

    if as_json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = render_metrics(measurement, false)?;

    writeln!(out)?;
    writeln!(out, "Deficit target: {} kcal/day", format_kcal(report.deficit_kcal))?;
    writeln!(out, "Surplus target: {} kcal/day", format_kcal(report.surplus_kcal))?;

    writeln!(out)?;
    writeln!(out, "Calorie Breakdown by Activity Level")?;
    for row in &report.activity_breakdown {
        writeln!(out, "  {:<36} {:>8}", row.label, row.kcal)?;
    }

    writeln!(out)?;
    writeln!(out, "Calorie Goals by Weight Target")?;
    for goal in &report.goals {
        writeln!(out, "  {:<36} {:>8} kcal/day", goal.label, goal.kcal)?;
    }

    writeln!(out)?;
    writeln!(out, "Recommended Macronutrient Splits")?;
    for plan in &report.macro_plans {
        writeln!(
            out,
            "  {:<26} {:>4} g protein  {:>4} g fat  {:>4} g carbs",
            plan.title, plan.protein_g, plan.fat_g, plan.carbs_g
        )?;
    }

    Ok(out)
}

/// Render the activity level reference table
pub fn render_activities() -> Result<String> {
    let mut out = String::new();
    for level in ActivityLevel::ALL {
        writeln!(
            out,
            "{:<18} {:<34} {}",
            level.name(),
            level.description(),
            level.multiplier()
        )?;
    }
    Ok(out)
}
