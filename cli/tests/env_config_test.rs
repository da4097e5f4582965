//! Environment variable layer of the config loader
//!
//! Kept in its own test binary with a single test: the variables it sets
//! are process-wide and would leak into the file-based config tests.

use fitness_calc_cli::config::CalcConfig;
use fitness_calc_shared::{ActivityLevel, Gender, UnitSystem};
use std::path::PathBuf;

#[test]
fn test_environment_overrides_file_and_defaults() {
    std::env::set_var("FITCALC__DEFAULTS__UNIT_SYSTEM", "imperial");
    std::env::set_var("FITCALC__DEFAULTS__ACTIVITY", "very_active");

    // Without a file the environment layers directly over the defaults
    let config = CalcConfig::load(None).unwrap();
    assert_eq!(config.defaults.unit_system, UnitSystem::Imperial);
    assert_eq!(config.defaults.activity, ActivityLevel::VeryActive);
    assert_eq!(config.defaults.gender, Gender::Male);

    // The environment also wins over a config file
    let path: PathBuf =
        std::env::temp_dir().join(format!("fitcalc-env-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[defaults]\nunit_system = \"metric\"\ngender = \"female\"\n",
    )
    .unwrap();
    let config = CalcConfig::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).ok();

    std::env::remove_var("FITCALC__DEFAULTS__UNIT_SYSTEM");
    std::env::remove_var("FITCALC__DEFAULTS__ACTIVITY");

    assert_eq!(config.defaults.unit_system, UnitSystem::Imperial);
    assert_eq!(config.defaults.gender, Gender::Female);
    assert_eq!(config.defaults.activity, ActivityLevel::VeryActive);
}
