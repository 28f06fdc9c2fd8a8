use anyhow::Result;
use beacon_convert::config::Config;
use beacon_convert::{display, logging, BeaconConverter};
use clap::Parser;
use std::process;
use tracing::info;

/// Converts `classified_timestamps_with_location.txt` in the working directory
/// into `beacons.json`.
#[derive(Parser)]
#[command(name = "beacon-convert")]
#[command(about = "Convert classified beacon location logs into per-device JSON tracks")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        handle_error(e);
    }
}

fn run() -> Result<()> {
    // A broken logging setup must never cost the conversion
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring configuration, using defaults: {:#}", e);
        Config::default()
    });

    let _log_guard = logging::init_logging(&config).unwrap_or_else(|e| {
        eprintln!("Warning: logging disabled: {:#}", e);
        None
    });

    if let Some(path) = Config::config_file() {
        info!(config_file = %path.display(), "Configuration file found");
    }

    let summary = BeaconConverter::default().convert()?;
    display::print_confirmation(&summary);

    Ok(())
}

fn handle_error(e: anyhow::Error) -> ! {
    eprintln!("Error: {:#}", e);
    process::exit(1);
}
