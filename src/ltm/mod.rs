//! # LTM Protocol Module
//!
//! Implementation of the Light Telemetry (LTM) downlink protocol.
//!
//! This module handles:
//! - Frame table lookup (tag to frame length)
//! - XOR checksum accumulation and verification
//! - Byte-at-a-time frame synchronization
//! - Payload decoding for Battery (`S`) and GPS (`G`) frames

pub mod protocol;
pub mod checksum;
pub mod parser;
pub mod decoder;
pub mod encoder;
