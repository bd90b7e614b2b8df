//! # Telemetry Module
//!
//! Holds the latest decoded LTM values and the loop that produces them.
//!
//! This module handles:
//! - Reading the LTM byte stream one byte at a time
//! - Publishing validated frames into a shared store
//! - Counting dropped frames for link diagnostics

pub mod reader;
pub mod store;

pub use reader::TelemetryReader;
pub use store::{FrameCounters, TelemetrySnapshot, TelemetryStore};
