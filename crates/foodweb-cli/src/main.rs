//! Console front end for the food web analyser.

mod console;
mod render;
mod telemetry;

use anyhow::Result;
use foodweb_core::CliConfig;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let config = CliConfig::from_env();

    telemetry::init_telemetry(&config)?;
    info!("Starting food web analyser ({:?} output)", config.output);

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(stdin.lock(), stdout.lock(), &config)?;

    Ok(())
}
