//! The dashboard's telemetry session.
//!
//! A session exclusively owns the current [`SensorReading`] and the
//! [`EventFeed`]; nothing else mutates them. The rendering layer only ever
//! sees per-tick [`TelemetrySnapshot`]s delivered through a source (see
//! the `source` module). `tick` runs to completion synchronously, so ticks
//! can never overlap, and any message recorded on a tick quotes the
//! reading committed on that same tick.

use std::time::Duration;

use crate::source::TelemetrySnapshot;

use super::feed::{EventFeed, LogEntry};
use super::rng::UniformSource;
use super::telemetry::SensorReading;

/// Fixed wall-clock cadence of the simulation.
pub const TICK_PERIOD: Duration = Duration::from_millis(2000);

type TickListener = Box<dyn FnMut(&TelemetrySnapshot) + Send>;

pub struct TelemetrySession {
    reading: SensorReading,
    feed: EventFeed,
    rng: Box<dyn UniformSource + Send>,
    ticks: u64,
    listeners: Vec<TickListener>,
}

impl TelemetrySession {
    /// Start from the seed reading and the seeded feed.
    pub fn new(rng: Box<dyn UniformSource + Send>) -> Self {
        Self {
            reading: SensorReading::seed(),
            feed: EventFeed::seeded(),
            rng,
            ticks: 0,
            listeners: Vec::new(),
        }
    }

    /// Latest committed reading.
    pub fn reading(&self) -> SensorReading {
        self.reading
    }

    /// Current feed contents, oldest first.
    pub fn log(&self) -> Vec<LogEntry> {
        self.feed.to_vec()
    }

    /// Register a callback run after each tick commits.
    pub fn on_tick(&mut self, listener: impl FnMut(&TelemetrySnapshot) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            reading: self.reading,
            log: self.feed.to_vec(),
            ticks: self.ticks,
        }
    }

    /// One simulation step: advance the walk, maybe record an event, then
    /// notify listeners with the committed snapshot.
    pub fn tick(&mut self) -> TelemetrySnapshot {
        self.reading = self.reading.advance(self.rng.as_mut());
        self.feed.maybe_record(&self.reading, self.rng.as_mut());
        self.ticks += 1;
        tracing::debug!(
            tick = self.ticks,
            vibration = self.reading.vibration,
            gas = self.reading.gas_level,
            "telemetry tick committed"
        );

        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
        snapshot
    }
}

impl std::fmt::Debug for TelemetrySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetrySession")
            .field("reading", &self.reading)
            .field("feed_len", &self.feed.len())
            .field("ticks", &self.ticks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::feed::FEED_CAPACITY;
    use crate::sim::rng::{ScriptedRandom, SeededRandom};
    use crate::sim::telemetry::{GAS_RANGE, VIBRATION_RANGE};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn session_with(draws: Vec<f64>) -> TelemetrySession {
        TelemetrySession::new(Box::new(ScriptedRandom::new(draws)))
    }

    #[test]
    fn test_initial_state_is_seeded() {
        let session = session_with(vec![0.5]);
        assert_eq!(session.reading(), SensorReading::seed());
        let log = session.log();
        assert_eq!(log.len(), 1);
        assert!(log[0].message.starts_with("System started"));
    }

    #[test]
    fn test_worked_scenario_full_tick() {
        // Draws: vibration 0.9, gas 0.75, probability 0.95 (> 0.7, so an
        // event is recorded), catalog index 0.0 (template 0).
        let mut session = session_with(vec![0.9, 0.75, 0.95, 0.0]);
        let snapshot = session.tick();

        assert_eq!(snapshot.reading.vibration, 2.7);
        assert_eq!(snapshot.reading.gas_level, 14);
        assert_eq!(snapshot.log.len(), 2);
        // The recorded message quotes the reading committed this tick,
        // not the previous one.
        assert_eq!(snapshot.log[1].message, "Sensor S-402: vibration normal (2.7 mm/s)");
    }

    #[test]
    fn test_idle_tick_updates_reading_but_not_log() {
        // Probability draw 0.4 stays under the threshold.
        let mut session = session_with(vec![0.9, 0.75, 0.4]);
        let before = session.log();
        let snapshot = session.tick();

        assert_eq!(snapshot.log, before);
        assert_ne!(snapshot.reading, SensorReading::seed());
    }

    #[test]
    fn test_replaying_draws_reproduces_the_session() {
        let draws = vec![0.9, 0.1, 0.8, 0.3, 0.2, 0.6, 0.95, 0.99];
        let mut a = session_with(draws.clone());
        let mut b = session_with(draws);
        for _ in 0..12 {
            let sa = a.tick();
            let sb = b.tick();
            assert_eq!(sa.reading, sb.reading);
            assert_eq!(
                sa.log.iter().map(|e| &e.message).collect::<Vec<_>>(),
                sb.log.iter().map(|e| &e.message).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_invariants_hold_over_long_unbiased_run() {
        let mut session = TelemetrySession::new(Box::new(SeededRandom::new(1234)));
        for _ in 0..100 {
            let snapshot = session.tick();
            assert!(snapshot.reading.vibration >= VIBRATION_RANGE.0 - 1e-9);
            assert!(snapshot.reading.vibration <= VIBRATION_RANGE.1 + 1e-9);
            assert!((GAS_RANGE.0..=GAS_RANGE.1).contains(&snapshot.reading.gas_level));
            assert!(snapshot.log.len() <= FEED_CAPACITY);
        }
    }

    #[test]
    fn test_listeners_run_after_commit() {
        let mut session = session_with(vec![0.9, 0.75, 0.95, 0.0]);
        let seen = Arc::new(AtomicU64::new(0));
        let seen_in_listener = Arc::clone(&seen);
        session.on_tick(move |snapshot| {
            assert_eq!(snapshot.reading.vibration, 2.7);
            seen_in_listener.store(snapshot.ticks, Ordering::SeqCst);
        });

        session.tick();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
