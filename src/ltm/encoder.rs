//! # LTM Frame Encoder
//!
//! Builds complete LTM frames. The bridge only receives LTM, so this is used to
//! simulate a flight controller in tests and tooling.

use super::checksum::xor_checksum;
use super::protocol::*;
use crate::error::Result;

/// Encode a payload into a complete LTM frame
///
/// # Arguments
///
/// * `frame_type` - Frame type to emit
/// * `payload` - Payload bytes, exactly `frame_type.payload_size()` long
///
/// # Returns
///
/// * `Result<Vec<u8>>` - `$`, `T`, tag, payload and XOR checksum
///
/// # Examples
///
/// ```
/// use ltm_bridge::ltm::encoder::encode_frame;
/// use ltm_bridge::ltm::protocol::FrameType;
///
/// let frame = encode_frame(FrameType::Status, &[0xE8, 0x0C, 0, 0, 0, 0, 0])?;
/// assert_eq!(frame, b"$TS\xE8\x0C\x00\x00\x00\x00\x00\xE4");
/// # Ok::<(), ltm_bridge::error::LtmError>(())
/// ```
pub fn encode_frame(frame_type: FrameType, payload: &[u8]) -> Result<Vec<u8>> {
    let frame = LtmFrame::new(frame_type, payload.to_vec())?;

    let mut bytes = Vec::with_capacity(frame_type.frame_length());
    bytes.push(LTM_SYNC_BYTE_1);
    bytes.push(LTM_SYNC_BYTE_2);
    bytes.push(frame_type.tag());
    bytes.extend_from_slice(&frame.payload);
    bytes.push(xor_checksum(&frame.payload));

    Ok(bytes)
}
