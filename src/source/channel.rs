//! Channel-based telemetry source.
//!
//! Receives snapshots via a tokio watch channel. The producer is the
//! simulation ticker task; this end hands snapshots to the TUI without
//! blocking the draw loop.

use tokio::sync::watch;

use super::{TelemetrySnapshot, TelemetrySource};

/// A source that receives telemetry snapshots via a watch channel.
///
/// Only the latest snapshot is retained; the view layer renders current
/// state, so intermediate snapshots it never polled are irrelevant.
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<TelemetrySnapshot>,
    description: String,
    /// Track if we've returned the initial value yet.
    initial_returned: bool,
}

impl ChannelSource {
    /// Wrap the receiving end of a watch channel.
    pub fn new(receiver: watch::Receiver<TelemetrySnapshot>, source_description: &str) -> Self {
        Self {
            receiver,
            description: source_description.to_string(),
            initial_returned: false,
        }
    }
}

impl TelemetrySource for ChannelSource {
    fn poll(&mut self) -> Option<TelemetrySnapshot> {
        // Return the initial value on first poll so the seed state (the
        // "system started" entry and the seed reading) renders before the
        // first tick lands.
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{LogEntry, SensorReading};

    fn snapshot(ticks: u64) -> TelemetrySnapshot {
        TelemetrySnapshot {
            reading: SensorReading::seed(),
            log: vec![LogEntry { time: "10:00:00".to_string(), message: "boot".to_string() }],
            ticks,
        }
    }

    #[test]
    fn test_first_poll_returns_initial_snapshot() {
        let (_tx, rx) = watch::channel(snapshot(0));
        let mut source = ChannelSource::new(rx, "test");

        let first = source.poll().expect("initial snapshot");
        assert_eq!(first.ticks, 0);

        // No new value, so the next poll returns None.
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_poll_sees_only_the_latest_snapshot() {
        let (tx, rx) = watch::channel(snapshot(0));
        let mut source = ChannelSource::new(rx, "test");
        let _ = source.poll();

        tx.send(snapshot(1)).unwrap();
        tx.send(snapshot(2)).unwrap();

        assert_eq!(source.poll().unwrap().ticks, 2);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_poll_survives_a_dropped_sender() {
        let (tx, rx) = watch::channel(snapshot(0));
        let mut source = ChannelSource::new(rx, "test");
        let _ = source.poll();

        drop(tx);
        assert!(source.poll().is_none());
        assert_eq!(source.description(), "test");
    }
}
