//! The read-only state handed to the view layer each tick.

use serde::Serialize;

use crate::sim::{LogEntry, SensorReading};

/// Everything the view layer needs from one committed tick.
///
/// Snapshots are owned copies: mutating session state after a snapshot is
/// taken never changes an already-delivered snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetrySnapshot {
    /// The committed reading.
    pub reading: SensorReading,
    /// Feed contents, oldest first, at most `FEED_CAPACITY` entries.
    pub log: Vec<LogEntry>,
    /// Ticks committed since the session started.
    pub ticks: u64,
}
