//! Snapshot delivery between the simulation and the view layer.
//!
//! The view layer never reaches into the session; it polls a
//! [`TelemetrySource`] for read-only snapshots. The shipped implementation
//! is [`ChannelSource`], fed by the ticker task over a watch channel;
//! tests substitute scripted sources.

mod channel;
mod snapshot;

pub use channel::ChannelSource;
pub use snapshot::TelemetrySnapshot;

use std::fmt::Debug;

/// Trait for receiving telemetry snapshots.
pub trait TelemetrySource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data arrived since the last poll,
    /// `None` otherwise. Must be non-blocking.
    fn poll(&mut self) -> Option<TelemetrySnapshot>;

    /// Human-readable description for the status bar.
    fn description(&self) -> &str;
}
