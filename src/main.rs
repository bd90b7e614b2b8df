//! # LTM Bridge
//!
//! Reads Light Telemetry (LTM) frames from a serial link and reports the
//! latest battery and GPS values.

use anyhow::{Context, Result};
use tokio::time::{interval, sleep, Duration};
use tracing::{info, warn};

use ltm_bridge::config::{Config, SerialConfig};
use ltm_bridge::serial::LtmSerial;
use ltm_bridge::telemetry::{TelemetryReader, TelemetryStore};

/// Configuration file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Main entry point for LTM Bridge application
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Load configuration (first argument, or `config/default.toml`)
///
/// 2. **Main Loop**
///    - A background task keeps the serial link open and decodes frames
///    - The latest snapshot is logged every `status_interval_ms`
///    - Handle Ctrl+C for graceful shutdown
///
/// # Errors
///
/// Returns error if the configuration cannot be loaded
///
/// # Examples
///
/// ```bash
/// RUST_LOG=ltm_bridge=debug cargo run --release -- config/default.toml
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("LTM Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    let store = TelemetryStore::new();
    let link = tokio::spawn(run_link(config.serial.clone(), store.clone()));

    let mut status_interval = interval(Duration::from_millis(config.telemetry.status_interval_ms));
    info!("Press Ctrl+C to exit");

    loop {
        tokio::select! {
            _ = status_interval.tick() => log_status(&store),

            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    link.abort();
    info!("Frame counters at exit: {:?}", store.counters());

    Ok(())
}

/// Keep the serial link open, starting a fresh reader after every failure
async fn run_link(serial: SerialConfig, store: TelemetryStore) {
    let reconnect_delay = Duration::from_millis(serial.reconnect_interval_ms);

    loop {
        match LtmSerial::open(&serial.port, serial.baud_rate) {
            Ok(port) => {
                let mut reader = TelemetryReader::new(port.into_byte_source(), store.clone());
                if let Err(e) = reader.run().await {
                    warn!("Telemetry link on {} lost: {}", serial.port, e);
                }
            }
            Err(e) => warn!("{}", e),
        }

        sleep(reconnect_delay).await;
    }
}

fn log_status(store: &TelemetryStore) {
    let snapshot = store.snapshot();
    let gps = snapshot.gps;

    info!(
        "Battery {} mV, {} mAh | GPS {:.7} {:.7}, {} sats, fix {}",
        snapshot.battery.voltage_mv,
        snapshot.battery.current_mah,
        gps.latitude as f64 / 10_000_000.0,
        gps.longitude as f64 / 10_000_000.0,
        gps.sats_fix.satellites(),
        gps.sats_fix.fix_type()
    );

    match serde_json::to_string(&snapshot) {
        Ok(json) => info!(target: "ltm_bridge::status", "{}", json),
        Err(e) => warn!("Failed to serialize telemetry snapshot: {}", e),
    }
}
