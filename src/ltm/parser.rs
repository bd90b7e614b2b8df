//! # LTM Frame Parser
//!
//! Byte-at-a-time framing state machine. Bytes are fed in as they arrive from
//! the link; a [`ParseEvent`] is produced whenever a frame attempt completes.
//!
//! ```text
//! Idle --'$'--> SawFirstSync --'T'--> SawSecondSync --tag--> Payload --checksum--> Idle
//!   ^               |                      |                                        |
//!   +----other------+-----unknown tag------+----------------------------------------+
//! ```
//!
//! Inside `Payload` every byte is data, including `$` and `T`.

use super::checksum::XorChecksum;
use super::protocol::*;

/// Framing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Scanning for `$`
    Idle,
    /// Saw `$`, expecting `T`
    SawFirstSync,
    /// Saw `$T`, expecting a frame type tag
    SawSecondSync,
    /// Collecting payload and checksum bytes
    Payload {
        frame_type: FrameType,
        /// Payload bytes stored so far
        received: usize,
    },
}

/// Outcome of a completed frame attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// Frame passed checksum validation
    Frame(LtmFrame),

    /// Frame was fully received but the checksum did not cancel out
    ChecksumError {
        frame_type: FrameType,
        /// Accumulated XOR after folding in the received checksum byte
        residual: u8,
    },

    /// `$T` was followed by a tag not in the frame table
    UnknownFrameType(u8),
}

/// LTM framing state machine
///
/// One parser owns the state of one byte stream. After a transport restart a
/// new parser must be used; partial frames are never resumed.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParserState,
    buffer: [u8; LTM_MAX_PAYLOAD_SIZE],
    checksum: XorChecksum,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a parser in the `Idle` state
    pub fn new() -> Self {
        Self {
            state: ParserState::Idle,
            buffer: [0u8; LTM_MAX_PAYLOAD_SIZE],
            checksum: XorChecksum::new(),
        }
    }

    /// Current framing state
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Drop any partial frame and return to `Idle`
    pub fn reset(&mut self) {
        self.state = ParserState::Idle;
        self.checksum.reset();
    }

    /// Feed one byte into the state machine
    ///
    /// # Returns
    ///
    /// * `Some(ParseEvent)` when this byte completes or aborts a frame attempt
    /// * `None` while still scanning or accumulating
    pub fn push_byte(&mut self, byte: u8) -> Option<ParseEvent> {
        match self.state {
            ParserState::Idle => {
                if byte == LTM_SYNC_BYTE_1 {
                    self.state = ParserState::SawFirstSync;
                }
                None
            }
            ParserState::SawFirstSync => {
                // A second '$' is not re-credited as a new first sync byte
                self.state = if byte == LTM_SYNC_BYTE_2 {
                    ParserState::SawSecondSync
                } else {
                    ParserState::Idle
                };
                None
            }
            ParserState::SawSecondSync => match FrameType::from_tag(byte) {
                Some(frame_type) => {
                    self.checksum.reset();
                    self.state = ParserState::Payload {
                        frame_type,
                        received: 0,
                    };
                    None
                }
                None => {
                    self.state = ParserState::Idle;
                    Some(ParseEvent::UnknownFrameType(byte))
                }
            },
            ParserState::Payload {
                frame_type,
                received,
            } => {
                self.checksum.update(byte);

                let payload_size = frame_type.payload_size();
                if received < payload_size {
                    self.buffer[received] = byte;
                    self.state = ParserState::Payload {
                        frame_type,
                        received: received + 1,
                    };
                    return None;
                }

                // This byte was the checksum
                self.state = ParserState::Idle;

                if self.checksum.is_valid() {
                    Some(ParseEvent::Frame(LtmFrame {
                        frame_type,
                        payload: self.buffer[..payload_size].to_vec(),
                    }))
                } else {
                    Some(ParseEvent::ChecksumError {
                        frame_type,
                        residual: self.checksum.value(),
                    })
                }
            }
        }
    }

    /// Feed a chunk of bytes, collecting every completed frame attempt
    ///
    /// Equivalent to calling [`FrameParser::push_byte`] for each byte in order.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Vec<ParseEvent> {
        bytes.iter().filter_map(|&byte| self.push_byte(byte)).collect()
    }
}
