//! # Serial Communication Module
//!
//! Handles the serial link carrying the LTM downlink.
//!
//! This module handles:
//! - Opening the serial port (8N1, no flow control)
//! - Exposing the port as a one-byte-at-a-time [`ByteSource`]

pub mod port_trait;

use crate::error::{LtmError, Result};
use tokio_serial::SerialPortBuilderExt;
use tracing::info;

pub use port_trait::{ByteSource, StreamByteSource};

/// LTM Serial Port Handler
///
/// Owns the serial stream the flight controller (or telemetry radio) writes
/// LTM frames to.
pub struct LtmSerial {
    /// Serial port handle
    port: tokio_serial::SerialStream,
    /// Device path (e.g., /dev/ttyUSB0)
    device_path: String,
}

impl std::fmt::Debug for LtmSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LtmSerial")
            .field("device_path", &self.device_path)
            .finish_non_exhaustive()
    }
}

impl LtmSerial {
    /// Open the serial port carrying LTM telemetry
    ///
    /// # Arguments
    ///
    /// * `path` - Device path (e.g., "/dev/ttyUSB0")
    /// * `baud_rate` - Link baud rate (LTM links commonly run at 2400 or 9600)
    ///
    /// # Errors
    ///
    /// Returns `LtmError::Serial` if the port cannot be opened
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ltm_bridge::serial::LtmSerial;
    ///
    /// # async fn run() -> anyhow::Result<()> {
    /// let serial = LtmSerial::open("/dev/ttyUSB0", 9600)?;
    /// println!("Connected to: {}", serial.device_path());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = tokio_serial::new(path, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| LtmError::Serial(format!("Failed to open {}: {}", path, e)))?;

        info!("Opened LTM serial port {} at {} baud", path, baud_rate);

        Ok(Self {
            port,
            device_path: path.to_string(),
        })
    }

    /// Get the device path of the opened serial port
    pub fn device_path(&self) -> &str {
        &self.device_path
    }

    /// Consume the port, yielding a byte source for the telemetry reader
    pub fn into_byte_source(self) -> StreamByteSource<tokio_serial::SerialStream> {
        StreamByteSource::new(self.port)
    }
}
