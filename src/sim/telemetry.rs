//! Bounded random-walk sensor simulation.
//!
//! Two scalar channels: SAG mill housing vibration and tunnel gas
//! concentration. Each tick perturbs the previous value by a small uniform
//! delta and clamps it back into its display range, so the gauges look
//! alive without ever leaving plausible territory. The walk is memoryless
//! beyond the single previous reading.

use serde::Serialize;

use super::rng::UniformSource;

/// Closed display range for vibration, in mm/s.
pub const VIBRATION_RANGE: (f64, f64) = (2.1, 4.9);
/// Vibration above this renders in the alarm style.
pub const VIBRATION_ALERT: f64 = 4.0;
/// Per-tick vibration delta spread: `(u - 0.5) * VIBRATION_STEP`.
pub const VIBRATION_STEP: f64 = 0.8;

/// Closed display range for gas concentration, in ppm.
pub const GAS_RANGE: (u32, u32) = (10, 50);
/// Per-tick gas delta spread.
pub const GAS_STEP: f64 = 10.0;

/// One committed pair of sensor values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    /// Mill vibration in mm/s, one decimal place.
    pub vibration: f64,
    /// Tunnel gas concentration in ppm.
    pub gas_level: u32,
}

impl SensorReading {
    /// The reading every session starts from.
    pub fn seed() -> Self {
        Self { vibration: 2.4, gas_level: 12 }
    }

    /// Advance the walk by one tick.
    ///
    /// Consumes exactly two draws, vibration first. Total over any valid
    /// previous reading; the result always satisfies the range invariants.
    pub fn advance(&self, rng: &mut dyn UniformSource) -> Self {
        let (vib_lo, vib_hi) = VIBRATION_RANGE;
        let vibration = self.vibration + (rng.next_uniform() - 0.5) * VIBRATION_STEP;
        let vibration = (vibration.clamp(vib_lo, vib_hi) * 10.0).round() / 10.0;

        let (gas_lo, gas_hi) = GAS_RANGE;
        let gas = self.gas_level as f64 + (rng.next_uniform() - 0.5) * GAS_STEP;
        let gas_level = gas.clamp(gas_lo as f64, gas_hi as f64).floor() as u32;

        Self { vibration, gas_level }
    }

    /// True when vibration is in the visual alarm band.
    ///
    /// Pure derived predicate for the rendering layer; it never feeds back
    /// into the walk.
    pub fn vibration_alert(&self) -> bool {
        self.vibration > VIBRATION_ALERT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_worked_scenario_tick() {
        // vibration: 2.4 + (0.9 - 0.5) * 0.8 = 2.72, rounds to 2.7
        // gas: floor(12 + (0.75 - 0.5) * 10) = 14
        let mut rng = ScriptedRandom::new(vec![0.9, 0.75]);
        let next = SensorReading::seed().advance(&mut rng);
        assert_eq!(next.vibration, 2.7);
        assert_eq!(next.gas_level, 14);
    }

    #[test]
    fn test_bounds_hold_under_extreme_draws() {
        let mut high = ScriptedRandom::new(vec![0.999_999]);
        let mut low = ScriptedRandom::new(vec![0.0]);

        let mut reading = SensorReading::seed();
        for _ in 0..100 {
            reading = reading.advance(&mut high);
            assert!(reading.vibration <= VIBRATION_RANGE.1 + 1e-9);
            assert!(reading.gas_level <= GAS_RANGE.1);
        }
        assert_eq!(reading.vibration, VIBRATION_RANGE.1);
        assert_eq!(reading.gas_level, GAS_RANGE.1);

        for _ in 0..100 {
            reading = reading.advance(&mut low);
            assert!(reading.vibration >= VIBRATION_RANGE.0 - 1e-9);
            assert!(reading.gas_level >= GAS_RANGE.0);
        }
        assert_eq!(reading.vibration, VIBRATION_RANGE.0);
        assert_eq!(reading.gas_level, GAS_RANGE.0);
    }

    #[test]
    fn test_bounds_and_rounding_over_unbiased_walk() {
        let mut rng = SeededRandom::new(7);
        let mut reading = SensorReading::seed();
        for _ in 0..100 {
            reading = reading.advance(&mut rng);
            assert!(reading.vibration >= VIBRATION_RANGE.0 - 1e-9);
            assert!(reading.vibration <= VIBRATION_RANGE.1 + 1e-9);
            assert!((GAS_RANGE.0..=GAS_RANGE.1).contains(&reading.gas_level));
            // Representable with exactly one decimal digit.
            let tenths = reading.vibration * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_walk_is_pure_in_previous_state_and_draws() {
        let reading = SensorReading { vibration: 3.3, gas_level: 27 };
        let mut a = ScriptedRandom::new(vec![0.2, 0.8]);
        let mut b = ScriptedRandom::new(vec![0.2, 0.8]);
        assert_eq!(reading.advance(&mut a), reading.advance(&mut b));
    }

    #[test]
    fn test_alert_band() {
        assert!(!SensorReading { vibration: 4.0, gas_level: 20 }.vibration_alert());
        assert!(SensorReading { vibration: 4.1, gas_level: 20 }.vibration_alert());
    }
}
