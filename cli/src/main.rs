//! `fitcalc` - TDEE calculator CLI
//!
//! ```bash
//! fitcalc metrics --weight 70 --height 175 --age 30 --gender male --activity 1.55
//! fitcalc report --unit imperial --weight 154 --height 69 --age 30 --body-fat 18
//! fitcalc activities
//! ```

use anyhow::Result;
use clap::Parser;
use fitness_calc_cli::args::{Cli, Command, FormArgs};
use fitness_calc_cli::config::CalcConfig;
use fitness_calc_cli::render;
use fitness_calc_shared::Measurement;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CalcConfig::load(cli.config.as_deref())?;

    init_tracing(cli.verbose, config.logging.json);
    debug!(?config, "Loaded configuration");

    let output = match &cli.command {
        Command::Metrics(form) => {
            let measurement = prepare(form, &config);
            render::render_metrics(&measurement, form.json || config.output.json)?
        }
        Command::Report(form) => {
            let measurement = prepare(form, &config);
            render::render_report(&measurement, form.json || config.output.json)?
        }
        Command::Activities => render::render_activities()?,
    };

    print!("{}", output);
    Ok(())
}

/// Build the measurement and report out-of-range fields without rejecting them
fn prepare(form: &FormArgs, config: &CalcConfig) -> Measurement {
    let measurement = form.measurement(&config.defaults);
    for warning in measurement.warnings() {
        warn!(field = %warning.field, "{}", warning.user_message());
    }
    debug!(
        unit = %measurement.unit_system,
        weight_kg = measurement.weight_kg(),
        height_cm = measurement.height_cm(),
        "Normalized measurement"
    );
    measurement
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout stays clean for the rendered output.
fn init_tracing(verbose: bool, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "fitness_calc_cli=debug,fitness_calc_shared=debug,fitcalc=debug".into()
        } else {
            "fitness_calc_cli=info,fitcalc=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
