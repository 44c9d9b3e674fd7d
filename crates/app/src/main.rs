//! ClockShop - Main Entry Point
//!
//! Loads a clock file, optionally stamps the current time, sorts the
//! result, prints it and writes it back out.

mod config;

use std::io::IsTerminal;

use clockshop_application::ports::FileSystem;
use clockshop_application::use_cases::{LoadClocks, StampCurrentTime, WriteClocks, WriteOutcome};
use clockshop_domain::ClockCollection;
use clockshop_infrastructure::{StdFileSystem, SystemTimeSource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))?,
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    tracing::info!("Starting ClockShop v{}", env!("CARGO_PKG_VERSION"));

    let fs = StdFileSystem::new();
    let mut clocks = ClockCollection::new();

    let loaded = LoadClocks::new(fs.clone()).execute(&mut clocks, &config.input)?;
    tracing::info!(path = %config.input.display(), loaded, "loaded clocks");

    if config.stamp_now {
        let stamped = StampCurrentTime::new(SystemTimeSource::new()).execute(&mut clocks);
        tracing::info!(%stamped, "added current time");
    }

    clocks.sort();
    print!("{clocks}");

    if let Some(target) = config.find {
        match clocks.find(&target) {
            Some(index) => tracing::info!(clock = %target, index, "found clock"),
            None => tracing::info!(clock = %target, "clock not found"),
        }
    }

    if let Some(output) = &config.output {
        if fs.exists(output) {
            tracing::info!(path = %output.display(), "overwriting existing file");
        }
        // Failures are logged by the use case and do not abort the run.
        if let WriteOutcome::Written { bytes, .. } = WriteClocks::new(fs).execute(&clocks, output) {
            tracing::info!(path = %output.display(), bytes, "wrote clocks");
        }
    }

    Ok(())
}
