//! Shared state types for the experiment UI.

use egui::Color32;

/// Step applied to the sampling frequency per key press, in Hz.
pub const SAMPLE_RATE_STEP_HZ: f64 = 500.0;
/// Step applied to the sample count per key press.
pub const SAMPLE_COUNT_STEP: usize = 100;

/// Mutable sampling parameters driven by keyboard input.
///
/// Both fields stay strictly positive: a decrease is refused once it would
/// take the value to zero or below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
    /// Sampling frequency in Hz.
    pub sample_rate_hz: f64,
    /// Number of samples taken per recompute.
    pub sample_count: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 4000.0,
            sample_count: 1000,
        }
    }
}

impl SamplingConfig {
    /// Raise the sampling frequency by one step.
    pub fn increase_sample_rate(&mut self) {
        self.sample_rate_hz += SAMPLE_RATE_STEP_HZ;
    }

    /// Lower the sampling frequency by one step.
    ///
    /// Returns false when the value is already at the lowest allowed step.
    pub fn decrease_sample_rate(&mut self) -> bool {
        if self.sample_rate_hz > SAMPLE_RATE_STEP_HZ {
            self.sample_rate_hz -= SAMPLE_RATE_STEP_HZ;
            true
        } else {
            false
        }
    }

    /// Raise the sample count by one step.
    pub fn increase_sample_count(&mut self) {
        self.sample_count += SAMPLE_COUNT_STEP;
    }

    /// Lower the sample count by one step.
    ///
    /// Returns false when the value is already at the lowest allowed step.
    pub fn decrease_sample_count(&mut self) -> bool {
        if self.sample_count > SAMPLE_COUNT_STEP {
            self.sample_count -= SAMPLE_COUNT_STEP;
            true
        } else {
            false
        }
    }

    /// Spacing between spectrum bins in Hz.
    pub fn frequency_resolution_hz(&self) -> f64 {
        self.sample_rate_hz / self.sample_count as f64
    }

    /// File name used when persisting the rendered view.
    pub fn screenshot_file_name(&self) -> String {
        format!(
            "experiment_fs_{}_N_{}.png",
            format_hz(self.sample_rate_hz),
            self.sample_count
        )
    }
}

/// Format a frequency without a trailing `.0` when it is integral.
pub fn format_hz(hz: f64) -> String {
    if hz.fract() == 0.0 {
        format!("{}", hz as i64)
    } else {
        format!("{hz}")
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: String::new(),
            badge_label: "Ready".into(),
            badge_color: Color32::from_rgb(42, 42, 42),
        }
    }
}

/// Fully recomputed render model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct ExperimentView {
    /// (time, amplitude) pairs of the sampled signal.
    pub time_points: Vec<[f64; 2]>,
    /// Draw discrete markers on top of the time line (sparse sampling).
    pub show_sample_markers: bool,
    /// Time of the final sample, the right edge of the time plot.
    pub time_x_max: f64,
    pub time_title: String,
    /// (frequency, magnitude) pairs of the one-sided spectrum.
    pub spectrum_bins: Vec<[f64; 2]>,
    /// Densified smooth curve over the spectrum, when enough bins exist.
    pub fit_points: Option<Vec<[f64; 2]>>,
    /// Width of each stem bar in Hz.
    pub stem_width_hz: f64,
    /// Right edge of the frequency plot: min(2·f2, fs/2).
    pub spectrum_x_max: f64,
    pub spectrum_title: String,
    pub status: StatusBarState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decreases_stop_at_one_step() {
        let mut config = SamplingConfig {
            sample_rate_hz: SAMPLE_RATE_STEP_HZ,
            sample_count: SAMPLE_COUNT_STEP,
        };
        assert!(!config.decrease_sample_rate());
        assert!(!config.decrease_sample_count());
        assert_eq!(config.sample_rate_hz, SAMPLE_RATE_STEP_HZ);
        assert_eq!(config.sample_count, SAMPLE_COUNT_STEP);
    }

    #[test]
    fn adjustments_move_by_whole_steps() {
        let mut config = SamplingConfig::default();
        config.increase_sample_rate();
        config.increase_sample_count();
        assert_eq!(config.sample_rate_hz, 4500.0);
        assert_eq!(config.sample_count, 1100);
        assert!(config.decrease_sample_rate());
        assert!(config.decrease_sample_count());
        assert_eq!(config.sample_rate_hz, 4000.0);
        assert_eq!(config.sample_count, 1000);
    }

    #[test]
    fn screenshot_file_name_embeds_both_parameters() {
        let config = SamplingConfig::default();
        assert_eq!(
            config.screenshot_file_name(),
            "experiment_fs_4000_N_1000.png"
        );
    }

    #[test]
    fn fractional_rates_keep_their_fraction_in_the_name() {
        let config = SamplingConfig {
            sample_rate_hz: 1333.5,
            sample_count: 200,
        };
        assert_eq!(
            config.screenshot_file_name(),
            "experiment_fs_1333.5_N_200.png"
        );
    }

    #[test]
    fn frequency_resolution_is_rate_over_count() {
        let config = SamplingConfig::default();
        assert!((config.frequency_resolution_hz() - 4.0).abs() < 1e-12);
    }
}
