//! # LTM Bridge Library
//!
//! Decode Light Telemetry (LTM) frames streamed from a flight controller and
//! expose the most recent values.
//!
//! ```no_run
//! use ltm_bridge::serial::LtmSerial;
//! use ltm_bridge::telemetry::{TelemetryReader, TelemetryStore};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = TelemetryStore::new();
//! let source = LtmSerial::open("/dev/ttyUSB0", 9600)?.into_byte_source();
//!
//! let mut reader = TelemetryReader::new(source, store.clone());
//! tokio::spawn(async move { reader.run().await });
//!
//! let (lat, lon) = store.gps();
//! println!("{} mV, {} {}", store.battery_voltage(), lat, lon);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod ltm;
pub mod serial;
pub mod telemetry;
