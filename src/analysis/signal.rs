//! Synthesis of the analytic two-tone experiment signal.

use std::f64::consts::{FRAC_PI_4, TAU};

/// Immutable constants of the analytic signal
/// `cos(2π·f1·t + φ) + cos(2π·f2·t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalParameters {
    /// Frequency of the phase-shifted tone, in Hz.
    pub f1_hz: f64,
    /// Frequency of the second tone, in Hz.
    pub f2_hz: f64,
    /// Phase offset applied to the f1 tone, in radians.
    pub phase_rad: f64,
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            f1_hz: 1000.0,
            f2_hz: 1100.0,
            phase_rad: FRAC_PI_4,
        }
    }
}

impl SignalParameters {
    /// Signal value at a single point in time.
    pub fn sample_at(&self, t: f64) -> f64 {
        (TAU * self.f1_hz * t + self.phase_rad).cos() + (TAU * self.f2_hz * t).cos()
    }

    /// Elementwise signal values for a sequence of time points.
    pub fn sample(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.sample_at(t)).collect()
    }

    /// Lowest sampling frequency that satisfies the Nyquist criterion.
    pub fn nyquist_rate_hz(&self) -> f64 {
        2.0 * self.f1_hz.max(self.f2_hz)
    }

    /// True when `sample_rate_hz` is below twice the highest tone.
    pub fn is_undersampled(&self, sample_rate_hz: f64) -> bool {
        sample_rate_hz < self.nyquist_rate_hz()
    }
}

/// Time points `0, 1/fs, ..., (count - 1)/fs`.
pub fn time_axis(count: usize, sample_rate_hz: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 / sample_rate_hz).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_two_tone_formula() {
        let params = SignalParameters::default();
        let times = [0.0, 0.000_125, 0.25, 1.0];
        let values = params.sample(&times);
        for (&t, &value) in times.iter().zip(&values) {
            let expected =
                (TAU * 1000.0 * t + FRAC_PI_4).cos() + (TAU * 1100.0 * t).cos();
            assert!((value - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn sample_accepts_empty_input() {
        let params = SignalParameters::default();
        assert!(params.sample(&[]).is_empty());
    }

    #[test]
    fn value_at_time_zero_reflects_phase() {
        let params = SignalParameters::default();
        let expected = FRAC_PI_4.cos() + 1.0;
        assert!((params.sample_at(0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn undersampling_threshold_is_twice_the_highest_tone() {
        let params = SignalParameters::default();
        assert!(params.is_undersampled(1500.0));
        assert!(params.is_undersampled(2199.9));
        assert!(!params.is_undersampled(2200.0));
        assert!(!params.is_undersampled(8000.0));
    }

    #[test]
    fn time_axis_is_evenly_spaced_from_zero() {
        let times = time_axis(5, 4000.0);
        assert_eq!(times.len(), 5);
        assert_eq!(times[0], 0.0);
        for pair in times.windows(2) {
            assert!((pair[1] - pair[0] - 0.000_25).abs() < 1e-12);
        }
    }

    #[test]
    fn time_axis_handles_zero_count() {
        assert!(time_axis(0, 4000.0).is_empty());
    }
}
