//! One-sided magnitude spectrum of a real sampled signal.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// One-sided magnitude spectrum with its frequency axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    /// Bin center frequencies in Hz, spaced fs/N apart.
    pub frequencies: Vec<f64>,
    /// Amplitude-normalized bin magnitudes.
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Number of retained bins, floor(N/2) for an N-point input.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the input was too short to produce any bins.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Bins as `[frequency, magnitude]` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .map(|(&frequency, &magnitude)| [frequency, magnitude])
            .collect()
    }
}

/// Computes magnitude spectra, reusing FFT plans across calls.
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
}

impl SpectrumAnalyzer {
    /// Create an analyzer with an empty plan cache.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Analyze `samples` captured at `sample_rate_hz`.
    ///
    /// Magnitudes are normalized by the sample count, then doubled to fold
    /// the discarded mirror half back in. DC is never doubled; at even
    /// lengths the final retained bin also stays undoubled. Inputs shorter
    /// than two samples produce an empty spectrum instead of failing.
    pub fn analyze(&mut self, samples: &[f64], sample_rate_hz: f64) -> Spectrum {
        let n = samples.len();
        let half = n / 2;
        if half == 0 {
            return Spectrum::default();
        }

        let mut buffer: Vec<Complex<f64>> =
            samples.iter().map(|&value| Complex::new(value, 0.0)).collect();
        self.planner.plan_fft_forward(n).process(&mut buffer);

        let scale = 1.0 / n as f64;
        let mut magnitudes: Vec<f64> =
            buffer[..half].iter().map(|bin| bin.norm() * scale).collect();
        let doubled_end = if n % 2 == 0 { half.saturating_sub(1) } else { half };
        if doubled_end > 1 {
            for magnitude in &mut magnitudes[1..doubled_end] {
                *magnitude *= 2.0;
            }
        }

        let frequencies = (0..half)
            .map(|bin| bin as f64 * sample_rate_hz / n as f64)
            .collect();
        Spectrum {
            frequencies,
            magnitudes,
        }
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
