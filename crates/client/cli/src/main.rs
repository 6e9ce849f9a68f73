//! Attack resolution runner.
//!
//! Loads a scenario and its orders from the content directory, pushes every
//! unit's declarations through the action queue and prints the resulting
//! to-hit breakdowns.
//!
//! ```bash
//! TOHIT_SCENARIO=night_raid TOHIT_FORMAT=json tohit
//! ```
mod config;
mod render;
mod round;

use anyhow::Result;
use config::CliConfig;
use tohit_content::ContentFactory;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        scenario = %config.scenario,
        orders = %config.orders_name(),
        "Starting resolution run"
    );

    let factory = ContentFactory::new(&config.data_dir);
    let battlefield = factory.load_scenario(&config.scenario)?;
    let orders = factory.load_orders(config.orders_name())?;

    let log = round::run_round(&battlefield, &orders)?;
    println!("{}", render::render(&log, config.format)?);

    Ok(())
}
