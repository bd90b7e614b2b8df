//! # LTM Payload Decoder
//!
//! Decodes validated LTM payloads (Status/Battery, GPS). Attitude, Origin,
//! Navigation and Extra frames are recognized but their fields are not
//! extracted.

use super::protocol::*;
use crate::error::{LtmError, Result};

/// Fields extracted from one validated frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryUpdate {
    /// Decoded `S` frame
    Battery(BatteryStatus),

    /// Decoded `G` frame
    Gps(GpsPosition),

    /// Known frame type whose fields are not extracted
    Undecoded(FrameType),
}

/// Decode a validated LTM frame
///
/// # Arguments
///
/// * `frame` - Frame produced by the parser
///
/// # Returns
///
/// * `Result<TelemetryUpdate>` - Extracted fields, or `Undecoded` for frame
///   types without a decoder
pub fn decode_frame(frame: &LtmFrame) -> Result<TelemetryUpdate> {
    match frame.frame_type {
        FrameType::Status => decode_battery(&frame.payload).map(TelemetryUpdate::Battery),
        FrameType::Gps => decode_gps(&frame.payload).map(TelemetryUpdate::Gps),
        FrameType::Attitude | FrameType::Origin | FrameType::Navigation | FrameType::Extra => {
            Ok(TelemetryUpdate::Undecoded(frame.frame_type))
        }
    }
}

/// Decode a Status (battery) payload
///
/// # Arguments
///
/// * `payload` - Status payload (7 bytes)
///
/// # Layout
///
/// ```text
/// [0..2)  voltage, mV, u16 little-endian
/// [2..4)  consumed current, mAh, u16 little-endian
/// [4]     RSSI
/// [5]     airspeed, m/s
/// [6]     status: bit0 armed, bit1 failsafe, bits 2..7 flight mode
/// ```
pub fn decode_battery(payload: &[u8]) -> Result<BatteryStatus> {
    if payload.len() < LTM_STATUS_PAYLOAD_SIZE {
        return Err(LtmError::Protocol(
            format!("Status payload too short: {} bytes", payload.len())
        ));
    }

    Ok(BatteryStatus {
        voltage_mv: u16::from_le_bytes([payload[0], payload[1]]),
        current_mah: u16::from_le_bytes([payload[2], payload[3]]),
        rssi: payload[4],
        airspeed: payload[5],
        status: payload[6],
    })
}

/// Decode a GPS payload
///
/// # Arguments
///
/// * `payload` - GPS payload (14 bytes)
///
/// # Layout
///
/// ```text
/// [0..4)   latitude, degrees × 10^7, i32 little-endian
/// [4..8)   longitude, degrees × 10^7, i32 little-endian
/// [8]      ground speed, m/s
/// [9..13)  altitude, cm, i32 little-endian
/// [13]     bits 2..7 satellites, bits 0..1 fix type
/// ```
pub fn decode_gps(payload: &[u8]) -> Result<GpsPosition> {
    if payload.len() < LTM_GPS_PAYLOAD_SIZE {
        return Err(LtmError::Protocol(
            format!("GPS payload too short: {} bytes", payload.len())
        ));
    }

    Ok(GpsPosition {
        latitude: i32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]),
        longitude: i32::from_le_bytes([payload[4], payload[5], payload[6], payload[7]]),
        ground_speed: payload[8],
        altitude_cm: i32::from_le_bytes([payload[9], payload[10], payload[11], payload[12]]),
        sats_fix: SatsFix(payload[13]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_battery() {
        let payload = [0xE8, 0x0C, 0x10, 0x27, 0xC8, 0x0F, 0b0000_1001];

        let battery = decode_battery(&payload).unwrap();
        assert_eq!(battery.voltage_mv, 3304);
        assert_eq!(battery.current_mah, 10000);
        assert_eq!(battery.rssi, 200);
        assert_eq!(battery.airspeed, 15);
        assert!(battery.armed());
        assert!(!battery.failsafe());
        assert_eq!(battery.flight_mode(), 2);
    }

    #[test]
    fn test_decode_battery_too_short() {
        let result = decode_battery(&[0u8; 4]);
        assert!(matches!(result, Err(LtmError::Protocol(_))));
    }

    #[test]
    fn test_decode_gps() {
        let mut payload = [0u8; 14];
        payload[0..4].copy_from_slice(&[0x00, 0x00, 0x00, 0x01]);
        payload[13] = 0b0000_1110;

        let gps = decode_gps(&payload).unwrap();
        assert_eq!(gps.latitude, 16_777_216);
        assert_eq!(gps.longitude, 0);
        assert_eq!(gps.sats_fix.satellites(), 3);
        assert_eq!(gps.sats_fix.fix_type(), LTM_GPS_FIX_2D);
    }

    #[test]
    fn test_decode_gps_signed_and_extended_fields() {
        // San Francisco: 37.7749, -122.4194
        let lat: i32 = 377_749_000;
        let lon: i32 = -1_224_194_000;
        let alt: i32 = -1_250;

        let mut payload = Vec::new();
        payload.extend_from_slice(&lat.to_le_bytes());
        payload.extend_from_slice(&lon.to_le_bytes());
        payload.push(12);
        payload.extend_from_slice(&alt.to_le_bytes());
        payload.push((9 << 2) | LTM_GPS_FIX_3D);

        let gps = decode_gps(&payload).unwrap();
        assert_eq!(gps.latitude, lat);
        assert_eq!(gps.longitude, lon);
        assert_eq!(gps.ground_speed, 12);
        assert_eq!(gps.altitude_cm, alt);
        assert_eq!(gps.sats_fix.satellites(), 9);
        assert_eq!(gps.sats_fix.fix_type(), LTM_GPS_FIX_3D);
    }

    #[test]
    fn test_decode_gps_too_short() {
        let result = decode_gps(&[0u8; 13]);
        assert!(matches!(result, Err(LtmError::Protocol(_))));
    }

    #[test]
    fn test_decode_frame_dispatch() {
        let frame = LtmFrame::new(FrameType::Status, vec![0xE8, 0x0C, 0, 0, 0, 0, 0]).unwrap();
        match decode_frame(&frame).unwrap() {
            TelemetryUpdate::Battery(battery) => assert_eq!(battery.voltage_mv, 3304),
            other => panic!("Expected battery update, got {:?}", other),
        }

        let frame = LtmFrame::new(FrameType::Gps, vec![0u8; 14]).unwrap();
        assert!(matches!(decode_frame(&frame).unwrap(), TelemetryUpdate::Gps(_)));
    }

    #[test]
    fn test_decode_frame_undecoded_types() {
        for frame_type in [
            FrameType::Attitude,
            FrameType::Origin,
            FrameType::Navigation,
            FrameType::Extra,
        ] {
            let frame = LtmFrame::new(frame_type, vec![0xAB; frame_type.payload_size()]).unwrap();
            assert_eq!(
                decode_frame(&frame).unwrap(),
                TelemetryUpdate::Undecoded(frame_type)
            );
        }
    }

    #[test]
    fn test_decoders_are_pure() {
        let payload = [0x34, 0x12, 0x78, 0x56, 1, 2, 3];
        assert_eq!(decode_battery(&payload).unwrap(), decode_battery(&payload).unwrap());
    }
}
