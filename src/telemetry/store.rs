//! # Telemetry Store
//!
//! Last-known telemetry values shared between the decode loop (single writer)
//! and any number of readers on other tasks or threads.
//!
//! Values persist across frames of other types: a GPS frame never touches the
//! battery fields and vice versa. Before the first decode of a frame type its
//! fields read as zero.

use serde::Serialize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ltm::decoder::TelemetryUpdate;
use crate::ltm::protocol::*;

/// Frame counters for link diagnostics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameCounters {
    /// Frames that passed checksum validation, any type
    pub frames: u64,

    /// Validated `S` frames
    pub status_frames: u64,

    /// Validated `G` frames
    pub gps_frames: u64,

    /// Validated frames of types whose fields are not extracted
    pub undecoded_frames: u64,

    /// Frames dropped on checksum mismatch
    pub checksum_errors: u64,

    /// Frames dropped on an unknown type tag
    pub unknown_frames: u64,
}

/// Coherent copy of all last-known telemetry values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetrySnapshot {
    /// Last decoded `S` frame
    pub battery: BatteryStatus,

    /// Last decoded `G` frame
    pub gps: GpsPosition,

    /// Frame counters at the time of the copy
    pub counters: FrameCounters,
}

/// Shared handle to the latest telemetry
///
/// Cloning is cheap; all clones see the same values.
///
/// # Examples
///
/// ```
/// use ltm_bridge::telemetry::store::TelemetryStore;
///
/// let store = TelemetryStore::new();
/// assert_eq!(store.battery_voltage(), 0);
/// assert!(!store.is_sat_3d_fix());
/// ```
#[derive(Debug, Default, Clone)]
pub struct TelemetryStore {
    inner: Arc<RwLock<TelemetrySnapshot>>,
}

impl TelemetryStore {
    /// Create a store with all values zeroed
    pub fn new() -> Self {
        Self::default()
    }

    // Plain data: a poisoned lock still holds usable values
    fn read(&self) -> RwLockReadGuard<'_, TelemetrySnapshot> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, TelemetrySnapshot> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply the fields decoded from one validated frame
    ///
    /// Only the fields belonging to that frame type change, all under one lock.
    pub fn apply(&self, update: TelemetryUpdate) {
        let mut snapshot = self.write();
        snapshot.counters.frames += 1;

        match update {
            TelemetryUpdate::Battery(battery) => {
                snapshot.battery = battery;
                snapshot.counters.status_frames += 1;
            }
            TelemetryUpdate::Gps(gps) => {
                snapshot.gps = gps;
                snapshot.counters.gps_frames += 1;
            }
            TelemetryUpdate::Undecoded(_) => {
                snapshot.counters.undecoded_frames += 1;
            }
        }
    }

    /// Count a frame dropped on checksum mismatch
    pub fn record_checksum_error(&self) {
        self.write().counters.checksum_errors += 1;
    }

    /// Count a frame dropped on an unknown type tag
    pub fn record_unknown_frame(&self) {
        self.write().counters.unknown_frames += 1;
    }

    /// Copy of every value, taken under a single lock
    pub fn snapshot(&self) -> TelemetrySnapshot {
        *self.read()
    }

    /// Frame counters
    pub fn counters(&self) -> FrameCounters {
        self.read().counters
    }

    /// Last decoded battery/status frame
    pub fn battery(&self) -> BatteryStatus {
        self.read().battery
    }

    /// Last decoded GPS frame
    pub fn gps_position(&self) -> GpsPosition {
        self.read().gps
    }

    /// Battery voltage in millivolts
    pub fn battery_voltage(&self) -> u16 {
        self.read().battery.voltage_mv
    }

    /// Consumed current in mAh
    pub fn current(&self) -> u16 {
        self.read().battery.current_mah
    }

    /// GPS fix type code (0-1 no fix, 2 = 2D, 3 = 3D)
    pub fn sat_fix(&self) -> u8 {
        self.read().gps.sats_fix.fix_type()
    }

    /// Number of visible satellites
    pub fn satellites_visible(&self) -> u8 {
        self.read().gps.sats_fix.satellites()
    }

    /// Latitude and longitude in degrees × 10^7, read together
    pub fn gps(&self) -> (i32, i32) {
        let snapshot = self.read();
        (snapshot.gps.latitude, snapshot.gps.longitude)
    }

    /// True when the GPS reports a 2D fix
    pub fn is_sat_2d_fix(&self) -> bool {
        self.sat_fix() == LTM_GPS_FIX_2D
    }

    /// True when the GPS reports a 3D fix
    pub fn is_sat_3d_fix(&self) -> bool {
        self.sat_fix() == LTM_GPS_FIX_3D
    }
}
