//! Command-line arguments for `fitcalc`

use crate::config::DefaultsConfig;
use clap::{Args, Parser, Subcommand};
use fitness_calc_shared::{ActivityLevel, Gender, Measurement, UnitSystem};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    version,
    about = "TDEE, BMR, BMI and ideal weight calculator",
    long_about = "Estimate daily calorie needs with the Mifflin–St Jeor or Katch–McArdle formulas."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to config/fitcalc.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show BMR, TDEE, BMI and ideal weight
    Metrics(FormArgs),

    /// Show the full report: calorie targets, activity breakdown and macro plans
    Report(FormArgs),

    /// List the standard activity levels and their multipliers
    Activities,
}

/// Calculator form fields
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Unit system: metric (kg/cm) or imperial (lb/inch)
    #[arg(long)]
    pub unit: Option<UnitSystem>,

    /// Body weight in kg or lb
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Height in cm or inches
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// male or female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Activity level name (e.g. moderately_active) or multiplier (e.g. 1.55)
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Body fat percentage; switches BMR to Katch–McArdle
    #[arg(long = "body-fat", allow_negative_numbers = true)]
    pub body_fat: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl FormArgs {
    /// Build the measurement, filling unset selectors from config
    pub fn measurement(&self, defaults: &DefaultsConfig) -> Measurement {
        Measurement {
            unit_system: self.unit.unwrap_or(defaults.unit_system),
            weight: self.weight,
            height: self.height,
            age_years: self.age,
            gender: self.gender.unwrap_or(defaults.gender),
            activity: self.activity.unwrap_or(defaults.activity),
            body_fat_percent: self.body_fat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_metrics_flags() {
        let cli = Cli::try_parse_from([
            "fitcalc", "metrics", "--unit", "imperial", "--weight", "154", "--height", "69",
            "--age", "30", "--gender", "female", "--activity", "1.55", "--body-fat", "22",
        ])
        .unwrap();

        let Command::Metrics(form) = cli.command else {
            panic!("expected metrics command");
        };
        let measurement = form.measurement(&DefaultsConfig::default());
        assert_eq!(measurement.unit_system, UnitSystem::Imperial);
        assert_eq!(measurement.weight, Some(154.0));
        assert_eq!(measurement.age_years, Some(30));
        assert_eq!(measurement.gender, Gender::Female);
        assert_eq!(measurement.activity, ActivityLevel::ModeratelyActive);
        assert_eq!(measurement.body_fat_percent, Some(22.0));
    }

    #[test]
    fn test_config_defaults_fill_unset_selectors() {
        let defaults = DefaultsConfig {
            unit_system: UnitSystem::Imperial,
            gender: Gender::Female,
            activity: ActivityLevel::VeryActive,
        };
        let measurement = FormArgs::default().measurement(&defaults);
        assert_eq!(measurement.unit_system, UnitSystem::Imperial);
        assert_eq!(measurement.gender, Gender::Female);
        assert_eq!(measurement.activity, ActivityLevel::VeryActive);
        assert_eq!(measurement.weight, None);
    }

    #[test]
    fn test_negative_values_reach_the_measurement() {
        let cli = Cli::try_parse_from([
            "fitcalc", "metrics", "--weight", "-70", "--height", "-175", "--age", "30",
            "--body-fat", "-5",
        ])
        .unwrap();

        let Command::Metrics(form) = cli.command else {
            panic!("expected metrics command");
        };
        let measurement = form.measurement(&DefaultsConfig::default());
        assert_eq!(measurement.weight, Some(-70.0));
        assert_eq!(measurement.height, Some(-175.0));
        assert_eq!(measurement.body_fat_percent, Some(-5.0));
        assert!(measurement.assess().bmr.is_none());
    }

    #[test]
    fn test_negative_body_fat_falls_back_to_mifflin() {
        let cli = Cli::try_parse_from([
            "fitcalc", "metrics", "--weight", "70", "--height", "175", "--age", "30",
            "--body-fat", "-5",
        ])
        .unwrap();

        let Command::Metrics(form) = cli.command else {
            panic!("expected metrics command");
        };
        let measurement = form.measurement(&DefaultsConfig::default());
        let bmr = measurement.assess().bmr.unwrap();
        assert_eq!(bmr.formula, fitness_calc_shared::BmrFormula::MifflinStJeor);
        assert_eq!(bmr.kcal, 1648.75);
        assert_eq!(measurement.warnings()[0].field, "body_fat");
    }

    #[test]
    fn test_rejects_unknown_activity() {
        let result = Cli::try_parse_from(["fitcalc", "metrics", "--activity", "couch"]);
        assert!(result.is_err());
    }
}
