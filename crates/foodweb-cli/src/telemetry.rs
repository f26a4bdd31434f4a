//! Log subscriber setup for the console binary.

use anyhow::Result;
use foodweb_core::CliConfig;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Logs go to stderr; stdout carries reports.
pub fn init_telemetry(config: &CliConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());

    let (plain_layer, json_layer) = if config.log_json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (
            Some(fmt::layer().with_target(true).with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain_layer)
        .with(json_layer)
        .try_init()?;

    debug!("Telemetry initialized");
    Ok(())
}
