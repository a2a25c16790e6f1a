//! Scoped repeating timer driving a session.
//!
//! Starting a ticker spawns a tokio task that calls
//! [`TelemetrySession::tick`] on a fixed cadence and hands back a
//! cancellation handle together with the [`ChannelSource`] the TUI polls.
//! Dropping the handle aborts the task, so navigating away from the
//! dashboard (or any other exit path) cannot leak a firing timer.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::source::ChannelSource;

use super::session::{TelemetrySession, TICK_PERIOD};

/// Cancellation handle for a running simulation timer.
#[derive(Debug)]
pub struct SimTicker {
    handle: JoinHandle<()>,
}

impl SimTicker {
    /// Spawn with the standard 2-second cadence.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(session: TelemetrySession) -> (Self, ChannelSource) {
        Self::spawn_with_period(session, TICK_PERIOD)
    }

    /// Spawn with an explicit period. Tests use a short one.
    pub fn spawn_with_period(
        mut session: TelemetrySession,
        period: Duration,
    ) -> (Self, ChannelSource) {
        let (tx, rx) = watch::channel(session.snapshot());
        session.on_tick(move |snapshot| {
            // The receiver may already be gone during teardown.
            let _ = tx.send(snapshot.clone());
        });

        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval fires immediately once; the seed state is already
            // in the channel, so skip that first firing.
            timer.tick().await;
            loop {
                timer.tick().await;
                session.tick();
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "simulation timer started");

        (Self { handle }, ChannelSource::new(rx, "simulated telemetry"))
    }

    /// Cancel the timer now rather than at drop.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for SimTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("simulation timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SeededRandom;
    use crate::source::TelemetrySource;

    fn test_session() -> TelemetrySession {
        TelemetrySession::new(Box::new(SeededRandom::new(99)))
    }

    #[tokio::test]
    async fn test_ticker_delivers_snapshots() {
        let (ticker, mut source) = SimTicker::spawn_with_period(
            test_session(),
            Duration::from_millis(5),
        );

        // First poll returns the seed state.
        let initial = source.poll().expect("initial snapshot");
        assert_eq!(initial.ticks, 0);

        tokio::time::sleep(Duration::from_millis(60)).await;
        let latest = source.poll().expect("ticked snapshot");
        assert!(latest.ticks > 0);

        drop(ticker);
    }

    #[tokio::test]
    async fn test_drop_cancels_the_timer() {
        let (ticker, mut source) = SimTicker::spawn_with_period(
            test_session(),
            Duration::from_millis(5),
        );

        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(ticker);
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Drain whatever was committed before the abort.
        let _ = source.poll();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(source.poll().is_none(), "no ticks may land after cancellation");
    }
}
