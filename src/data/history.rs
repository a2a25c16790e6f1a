//! Short reading history for the dashboard sparklines.
//!
//! Records the last minute or so of committed readings so the gauges can
//! show a trend next to the current value. Presentation state only: the
//! app records whatever snapshots it polls, and the history dies with the
//! dashboard view.

use std::collections::VecDeque;

use crate::sim::telemetry::{SensorReading, GAS_RANGE, VIBRATION_RANGE};

/// Maximum number of readings to keep.
const MAX_HISTORY_SIZE: usize = 60;

/// Rolling window of recent readings.
#[derive(Debug, Clone, Default)]
pub struct History {
    vibration: VecDeque<f64>,
    gas: VecDeque<u32>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed reading.
    pub fn record(&mut self, reading: &SensorReading) {
        self.vibration.push_back(reading.vibration);
        if self.vibration.len() > MAX_HISTORY_SIZE {
            self.vibration.pop_front();
        }

        self.gas.push_back(reading.gas_level);
        if self.gas.len() > MAX_HISTORY_SIZE {
            self.gas.pop_front();
        }
    }

    /// Number of recorded readings.
    pub fn len(&self) -> usize {
        self.vibration.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vibration.is_empty()
    }

    /// Forget everything. Called when the dashboard view remounts.
    pub fn clear(&mut self) {
        self.vibration.clear();
        self.gas.clear();
    }

    /// Vibration trend normalized to 0-7 bar levels against the sensor's
    /// fixed display range.
    pub fn vibration_sparkline(&self) -> Vec<u8> {
        let (lo, hi) = VIBRATION_RANGE;
        self.vibration.iter().map(|&v| normalize(v, lo, hi)).collect()
    }

    /// Gas trend normalized to 0-7 bar levels.
    pub fn gas_sparkline(&self) -> Vec<u8> {
        let (lo, hi) = GAS_RANGE;
        self.gas.iter().map(|&v| normalize(v as f64, lo as f64, hi as f64)).collect()
    }
}

/// Map a value in [lo, hi] to a 0-7 bar level.
fn normalize(value: f64, lo: f64, hi: f64) -> u8 {
    let level = ((value - lo) / (hi - lo) * 7.0).round();
    (level.clamp(0.0, 7.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(vibration: f64, gas_level: u32) -> SensorReading {
        SensorReading { vibration, gas_level }
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for _ in 0..200 {
            history.record(&reading(3.0, 20));
        }
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
    }

    #[test]
    fn test_sparkline_endpoints() {
        let mut history = History::new();
        history.record(&reading(VIBRATION_RANGE.0, GAS_RANGE.0));
        history.record(&reading(VIBRATION_RANGE.1, GAS_RANGE.1));

        assert_eq!(history.vibration_sparkline(), vec![0, 7]);
        assert_eq!(history.gas_sparkline(), vec![0, 7]);
    }

    #[test]
    fn test_clear_resets_the_window() {
        let mut history = History::new();
        history.record(&reading(3.0, 20));
        history.clear();
        assert!(history.is_empty());
        assert!(history.vibration_sparkline().is_empty());
    }
}
