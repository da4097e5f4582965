//! Result report shown around the calculator
//!
//! Everything here is derived from an [`Assessment`]: calorie targets, the
//! breakdown by activity level and the macronutrient plans. Missing BMR/TDEE
//! renders as zero throughout, matching the result panel.

use crate::health_metrics::{ActivityLevel, Assessment};
use serde::Serialize;

/// Headline deficit target (20% below maintenance)
pub const DEFICIT_FACTOR: f64 = 0.8;
/// Headline surplus target (10% above maintenance)
pub const SURPLUS_FACTOR: f64 = 1.1;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Calorie goals by weight target, as factors of TDEE
pub const CALORIE_GOALS: [(&str, f64); 4] = [
    ("Moderate Weight Loss (≈0.5 kg/week)", 0.8),
    ("Mild Weight Loss (≈0.25 kg/week)", 0.9),
    ("Mild Weight Gain (≈0.25 kg/week)", 1.1),
    ("Moderate Weight Gain (≈0.5 kg/week)", 1.2),
];

/// Macronutrient split as fractions of daily calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroPlan {
    pub title: &'static str,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

pub const MACRO_PLANS: [MacroPlan; 3] = [
    MacroPlan { title: "Moderate Carb (30/35/35)", protein: 0.3, fat: 0.35, carbs: 0.35 },
    MacroPlan { title: "Lower Carb (40/40/20)", protein: 0.4, fat: 0.4, carbs: 0.2 },
    MacroPlan { title: "Higher Carb (30/20/50)", protein: 0.3, fat: 0.2, carbs: 0.5 },
];

impl MacroPlan {
    /// Convert the split into grams for a daily calorie budget
    pub fn grams(&self, calories: f64) -> MacroGrams {
        MacroGrams {
            title: self.title,
            protein_g: round_kcal(self.protein * calories / KCAL_PER_GRAM_PROTEIN),
            fat_g: round_kcal(self.fat * calories / KCAL_PER_GRAM_FAT),
            carbs_g: round_kcal(self.carbs * calories / KCAL_PER_GRAM_CARBS),
        }
    }
}

/// A macro plan resolved to grams per day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroGrams {
    pub title: &'static str,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}

/// One row of the "calories by activity level" table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    pub label: &'static str,
    pub multiplier: f64,
    pub kcal: i64,
}

/// A labelled daily calorie target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieGoal {
    pub label: &'static str,
    pub factor: f64,
    pub kcal: i64,
}

/// Full report for the current measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub bmr_kcal: f64,
    pub maintenance_kcal: f64,
    pub weekly_kcal: f64,
    pub deficit_kcal: f64,
    pub surplus_kcal: f64,
    pub goals: Vec<CalorieGoal>,
    pub activity_breakdown: Vec<ActivityRow>,
    pub macro_plans: Vec<MacroGrams>,
}

impl Report {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let bmr = assessment.bmr.map_or(0.0, |bmr| bmr.kcal);
        let tdee = assessment.tdee().unwrap_or(0.0);

        Self {
            bmr_kcal: bmr,
            maintenance_kcal: tdee,
            weekly_kcal: tdee * 7.0,
            deficit_kcal: tdee * DEFICIT_FACTOR,
            surplus_kcal: tdee * SURPLUS_FACTOR,
            goals: CALORIE_GOALS
                .iter()
                .map(|&(label, factor)| CalorieGoal {
                    label,
                    factor,
                    kcal: round_kcal(tdee * factor),
                })
                .collect(),
            activity_breakdown: activity_breakdown(bmr),
            macro_plans: MACRO_PLANS.iter().map(|plan| plan.grams(tdee)).collect(),
        }
    }
}

/// BMR alone plus BMR scaled by each standard multiplier
pub fn activity_breakdown(bmr: f64) -> Vec<ActivityRow> {
    let bmr = if bmr > 0.0 { bmr } else { 0.0 };
    std::iter::once(("Basal Metabolic Rate (BMR)", 1.0))
        .chain(ActivityLevel::ALL.iter().map(|level| (breakdown_label(*level), level.multiplier())))
        .map(|(label, multiplier)| ActivityRow {
            label,
            multiplier,
            kcal: round_kcal(bmr * multiplier),
        })
        .collect()
}

fn breakdown_label(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
        ActivityLevel::LightlyActive => "Light Exercise (1–2 days/week)",
        ActivityLevel::ModeratelyActive => "Moderate Exercise (3–4 days/week)",
        ActivityLevel::VeryActive => "Heavy Exercise (5–6 days/week)",
        ActivityLevel::ExtraActive => "Athlete (daily intense training)",
    }
}

fn round_kcal(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Round to whole kcal and group thousands with commas
///
/// `2555.56` renders as `"2,556"`; zero and non-finite values render `"0"`.
pub fn format_kcal(value: f64) -> String {
    let rounded = round_kcal(value);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::{Gender, Measurement};
    use crate::units::UnitSystem;
    use rstest::rstest;

    fn scenario_a() -> Measurement {
        Measurement {
            unit_system: UnitSystem::Metric,
            weight: Some(70.0),
            height: Some(175.0),
            age_years: Some(30),
            gender: Gender::Male,
            activity: ActivityLevel::ModeratelyActive,
            body_fat_percent: None,
        }
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(999.4, "999")]
    #[case(2555.5625, "2,556")]
    #[case(17888.9375, "17,889")]
    #[case(1234567.0, "1,234,567")]
    #[case(-478.2, "-478")]
    #[case(f64::NAN, "0")]
    fn test_format_kcal(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_kcal(value), expected);
    }

    #[test]
    fn test_headline_targets() {
        let report = Report::from_assessment(&scenario_a().assess());
        assert!((report.maintenance_kcal - 2555.5625).abs() < 1e-9);
        assert!((report.weekly_kcal - 17888.9375).abs() < 1e-6);
        assert_eq!(format_kcal(report.deficit_kcal), "2,044");
        assert_eq!(format_kcal(report.surplus_kcal), "2,811");
    }

    #[test]
    fn test_calorie_goals() {
        let report = Report::from_assessment(&scenario_a().assess());
        let kcal: Vec<i64> = report.goals.iter().map(|g| g.kcal).collect();
        assert_eq!(kcal, vec![2044, 2300, 2811, 3067]);
    }

    #[test]
    fn test_activity_breakdown() {
        let rows = activity_breakdown(1648.75);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "Basal Metabolic Rate (BMR)");
        let kcal: Vec<i64> = rows.iter().map(|r| r.kcal).collect();
        assert_eq!(kcal, vec![1649, 1979, 2267, 2556, 2844, 3133]);
    }

    #[test]
    fn test_breakdown_is_zero_without_bmr() {
        assert!(activity_breakdown(0.0).iter().all(|row| row.kcal == 0));
        assert!(activity_breakdown(-120.0).iter().all(|row| row.kcal == 0));
    }

    #[test]
    fn test_macro_grams() {
        let moderate = MACRO_PLANS[0].grams(2000.0);
        assert_eq!((moderate.protein_g, moderate.fat_g, moderate.carbs_g), (150, 78, 175));

        let lower = MACRO_PLANS[1].grams(2000.0);
        assert_eq!((lower.protein_g, lower.fat_g, lower.carbs_g), (200, 89, 100));

        let higher = MACRO_PLANS[2].grams(2000.0);
        assert_eq!((higher.protein_g, higher.fat_g, higher.carbs_g), (150, 44, 250));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = Report::from_assessment(&scenario_a().assess());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["maintenanceKcal"].is_number());
        assert!(json["weeklyKcal"].is_number());
        assert_eq!(json["activityBreakdown"][1]["kcal"], 1979);
        assert_eq!(json["goals"][3]["factor"], 1.2);
        assert_eq!(json["macroPlans"][1]["fatG"], 114);
        assert!(json.get("activity_breakdown").is_none());
    }

    #[test]
    fn test_incomplete_measurement_reports_zeroes() {
        let report = Report::from_assessment(&Measurement::default().assess());
        assert_eq!(report.maintenance_kcal, 0.0);
        assert_eq!(report.weekly_kcal, 0.0);
        assert!(report.goals.iter().all(|g| g.kcal == 0));
        assert!(report
            .macro_plans
            .iter()
            .all(|m| m.protein_g == 0 && m.fat_g == 0 && m.carbs_g == 0));
    }
}
