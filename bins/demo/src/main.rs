//! Exchequer demo
//!
//! Builds the sample government budget tree, runs funds requests and
//! transfers against it, and prints each stage to stdout.

mod scenario;

use anyhow::Context;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use exchequer_shared::{AppConfig, AppError};
use exchequer_shared::config::LogConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;

    init_tracing(&config.log);

    let stdout = std::io::stdout();
    if let Err(err) = scenario::run(&config, &mut stdout.lock()) {
        error!(code = err.error_code(), %err, "Scenario failed");
        std::process::exit(err.exit_code());
    }

    Ok(())
}

/// Logs go to stderr; stdout carries the renderings.
fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
