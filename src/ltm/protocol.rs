//! # LTM Protocol Constants and Types
//!
//! Core protocol definitions for LTM (Light Telemetry) frames.
//!
//! ```text
//! byte 0      '$'
//! byte 1      'T'
//! byte 2      frame type tag (G, A, S, O, N, X)
//! bytes 3..   payload (fixed size per frame type)
//! last byte   XOR of all payload bytes
//! ```

use serde::Serialize;

use crate::error::{LtmError, Result};

/// First sync byte of every LTM frame
pub const LTM_SYNC_BYTE_1: u8 = b'$';

/// Second sync byte of every LTM frame
pub const LTM_SYNC_BYTE_2: u8 = b'T';

/// Bytes in a frame that are not payload: sync(2) + type(1) + checksum(1)
pub const LTM_FRAME_OVERHEAD: usize = 4;

/// Largest payload of any known frame type (G and O frames)
pub const LTM_MAX_PAYLOAD_SIZE: usize = 14;

/// GPS fix type codes carried in the low two bits of the G frame sats/fix byte
pub const LTM_GPS_FIX_NONE: u8 = 0;
pub const LTM_GPS_FIX_2D: u8 = 2;
pub const LTM_GPS_FIX_3D: u8 = 3;

/// LTM frame types
///
/// Each type has a fixed total length on the wire; the variant order follows
/// the frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    /// GPS position, ground speed, altitude, satellites
    Gps,
    /// Attitude (pitch, roll, heading)
    Attitude,
    /// Battery, consumption, RSSI, arming status
    Status,
    /// Home position
    Origin,
    /// Navigation status
    Navigation,
    /// HDOP and hardware status
    Extra,
}

impl FrameType {
    /// All known frame types
    pub const ALL: [FrameType; 6] = [
        FrameType::Gps,
        FrameType::Attitude,
        FrameType::Status,
        FrameType::Origin,
        FrameType::Navigation,
        FrameType::Extra,
    ];

    /// Look up a frame type by its wire tag
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'G' => Some(FrameType::Gps),
            b'A' => Some(FrameType::Attitude),
            b'S' => Some(FrameType::Status),
            b'O' => Some(FrameType::Origin),
            b'N' => Some(FrameType::Navigation),
            b'X' => Some(FrameType::Extra),
            _ => None,
        }
    }

    /// Wire tag of this frame type
    pub fn tag(self) -> u8 {
        match self {
            FrameType::Gps => b'G',
            FrameType::Attitude => b'A',
            FrameType::Status => b'S',
            FrameType::Origin => b'O',
            FrameType::Navigation => b'N',
            FrameType::Extra => b'X',
        }
    }

    /// Total frame length including sync, type and checksum bytes
    pub fn frame_length(self) -> usize {
        match self {
            FrameType::Gps => 18,
            FrameType::Attitude => 10,
            FrameType::Status => 11,
            FrameType::Origin => 18,
            FrameType::Navigation => 10,
            FrameType::Extra => 10,
        }
    }

    /// Payload length (frame length minus framing overhead)
    pub fn payload_size(self) -> usize {
        self.frame_length() - LTM_FRAME_OVERHEAD
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag() as char)
    }
}

/// A checksum-validated LTM frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LtmFrame {
    /// Frame type
    pub frame_type: FrameType,

    /// Payload data, exactly `frame_type.payload_size()` bytes
    pub payload: Vec<u8>,
}

impl LtmFrame {
    /// Create a new LTM frame
    ///
    /// # Errors
    ///
    /// Returns error if the payload size does not match the frame table
    pub fn new(frame_type: FrameType, payload: Vec<u8>) -> Result<Self> {
        if payload.len() != frame_type.payload_size() {
            return Err(LtmError::Protocol(format!(
                "{} frame payload must be {} bytes, got {}",
                frame_type,
                frame_type.payload_size(),
                payload.len()
            )));
        }

        Ok(Self {
            frame_type,
            payload,
        })
    }
}

/// Status (battery) frame payload size
pub const LTM_STATUS_PAYLOAD_SIZE: usize = 7;

/// GPS frame payload size
pub const LTM_GPS_PAYLOAD_SIZE: usize = 14;

/// Battery and arming status from an `S` frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatteryStatus {
    /// Battery voltage in millivolts
    pub voltage_mv: u16,

    /// Consumed current in mAh
    pub current_mah: u16,

    /// Receiver RSSI (0-255)
    pub rssi: u8,

    /// Airspeed in m/s
    pub airspeed: u8,

    /// Raw status byte (armed, failsafe, flight mode)
    pub status: u8,
}

impl BatteryStatus {
    /// Bit 0 of the status byte
    pub fn armed(&self) -> bool {
        self.status & 0x01 != 0
    }

    /// Bit 1 of the status byte
    pub fn failsafe(&self) -> bool {
        self.status & 0x02 != 0
    }

    /// Bits 2..7 of the status byte
    pub fn flight_mode(&self) -> u8 {
        self.status >> 2
    }
}

/// Packed satellite count and fix type byte from a `G` frame
///
/// Stored raw; the two fields are derived on read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SatsFix(pub u8);

impl SatsFix {
    /// Fix type code: 0 or 1 = no fix, 2 = 2D, 3 = 3D
    pub fn fix_type(self) -> u8 {
        self.0 & 0x03
    }

    /// Number of visible satellites
    pub fn satellites(self) -> u8 {
        self.0 >> 2
    }
}

/// GPS position from a `G` frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GpsPosition {
    /// Latitude in degrees × 10^7
    pub latitude: i32,

    /// Longitude in degrees × 10^7
    pub longitude: i32,

    /// Ground speed in m/s
    pub ground_speed: u8,

    /// Altitude in centimeters
    pub altitude_cm: i32,

    /// Satellite count and fix type
    pub sats_fix: SatsFix,
}
