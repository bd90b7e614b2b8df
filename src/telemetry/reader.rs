//! # Telemetry Reader
//!
//! Drives a [`FrameParser`] from a [`ByteSource`] and publishes decoded values
//! into a [`TelemetryStore`].
//!
//! Protocol noise (checksum mismatches, unknown frame types) is logged, counted
//! and skipped. Only a transport failure ends [`TelemetryReader::run`]; the
//! owner decides whether to reopen the link and start a new reader.

use tracing::{debug, trace, warn};

use super::store::TelemetryStore;
use crate::error::{LtmError, Result};
use crate::ltm::decoder::decode_frame;
use crate::ltm::parser::{FrameParser, ParseEvent};
use crate::serial::ByteSource;

/// Decode loop for one LTM byte stream
pub struct TelemetryReader<S> {
    source: S,
    parser: FrameParser,
    store: TelemetryStore,
}

impl<S: ByteSource> TelemetryReader<S> {
    /// Create a reader with a fresh parser publishing into `store`
    pub fn new(source: S, store: TelemetryStore) -> Self {
        Self {
            source,
            parser: FrameParser::new(),
            store,
        }
    }

    /// Handle to the store this reader publishes into
    pub fn store(&self) -> &TelemetryStore {
        &self.store
    }

    /// Read and decode bytes until the source fails
    ///
    /// # Errors
    ///
    /// Never returns `Ok`. Returns:
    /// - `LtmError::StreamClosed` when the source reaches end-of-stream
    /// - `LtmError::Io` for any other read failure
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let byte = match self.source.read_byte().await {
                Ok(byte) => byte,
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    debug!("Telemetry stream reached end-of-file");
                    return Err(LtmError::StreamClosed);
                }
                Err(e) => return Err(LtmError::Io(e)),
            };

            self.handle_byte(byte);
        }
    }

    /// Feed a single byte through the parser and publish any result
    pub fn handle_byte(&mut self, byte: u8) {
        let Some(event) = self.parser.push_byte(byte) else {
            return;
        };

        match event {
            ParseEvent::Frame(frame) => match decode_frame(&frame) {
                Ok(update) => {
                    trace!("Decoded {} frame: {:?}", frame.frame_type, update);
                    self.store.apply(update);
                }
                Err(e) => warn!("Failed to decode {} frame: {}", frame.frame_type, e),
            },
            ParseEvent::ChecksumError {
                frame_type,
                residual,
            } => {
                warn!(
                    "Frame checksum error on {} frame (residual {:#04x})",
                    frame_type, residual
                );
                self.store.record_checksum_error();
            }
            ParseEvent::UnknownFrameType(tag) => {
                debug!("Skipped frame with unknown type {:#04x}", tag);
                self.store.record_unknown_frame();
            }
        }
    }
}
