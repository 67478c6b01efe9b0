//! Session state transitions and recompute-on-change plumbing.

use crate::analysis::fit;
use crate::analysis::signal::{self, SignalParameters};
use crate::analysis::spectrum::SpectrumAnalyzer;
use crate::egui_app::export::ViewExportError;
use crate::egui_app::state::{ExperimentView, SamplingConfig, StatusBarState, format_hz};
use egui::Color32;
use std::path::Path;

/// Sample counts at or below this limit draw per-sample markers.
pub const SAMPLE_MARKER_LIMIT: usize = 100;

/// Maintains experiment state and bridges the analysis core to the egui UI.
pub struct ExperimentController {
    /// Render model consumed by the egui renderer.
    pub view: ExperimentView,
    config: SamplingConfig,
    params: SignalParameters,
    analyzer: SpectrumAnalyzer,
}

impl ExperimentController {
    /// Create a session with the initial parameters and a fresh render model.
    pub fn new() -> Self {
        let mut controller = Self {
            view: ExperimentView::default(),
            config: SamplingConfig::default(),
            params: SignalParameters::default(),
            analyzer: SpectrumAnalyzer::new(),
        };
        controller.recompute();
        controller
    }

    /// Current sampling parameters.
    pub fn config(&self) -> SamplingConfig {
        self.config
    }

    /// Fixed parameters of the analytic signal.
    pub fn params(&self) -> SignalParameters {
        self.params
    }

    /// Raise the sampling frequency by one step and redraw.
    pub fn increase_sample_rate(&mut self) {
        self.config.increase_sample_rate();
        tracing::info!(
            "Sampling frequency increased to {} Hz",
            self.config.sample_rate_hz
        );
        self.recompute();
    }

    /// Lower the sampling frequency by one step; ignored at the floor.
    pub fn decrease_sample_rate(&mut self) {
        if !self.config.decrease_sample_rate() {
            return;
        }
        tracing::info!(
            "Sampling frequency decreased to {} Hz",
            self.config.sample_rate_hz
        );
        self.recompute();
    }

    /// Raise the sample count by one step and redraw.
    pub fn increase_sample_count(&mut self) {
        self.config.increase_sample_count();
        tracing::info!("Sample count increased to {}", self.config.sample_count);
        self.recompute();
    }

    /// Lower the sample count by one step; ignored at the floor.
    pub fn decrease_sample_count(&mut self) {
        if !self.config.decrease_sample_count() {
            return;
        }
        tracing::info!("Sample count decreased to {}", self.config.sample_count);
        self.recompute();
    }

    /// File name for persisting the current view.
    pub fn screenshot_file_name(&self) -> String {
        self.config.screenshot_file_name()
    }

    /// Record a successful view export in the status bar.
    pub fn note_view_saved(&mut self, path: &Path) {
        tracing::info!("View saved to {}", path.display());
        self.set_status(format!("Saved {}", path.display()), StatusTone::Info);
    }

    /// Record a failed view export in the status bar.
    pub fn note_save_failed(&mut self, error: &ViewExportError) {
        tracing::error!("Failed to save view: {error}");
        self.set_status(format!("Save failed: {error}"), StatusTone::Error);
    }

    /// Rebuild the full render model from the current parameters.
    ///
    /// Nothing is cached between transitions: samples, spectrum, and fit
    /// curve are recomputed wholesale on every accepted key event.
    fn recompute(&mut self) {
        let times = signal::time_axis(self.config.sample_count, self.config.sample_rate_hz);
        let samples = self.params.sample(&times);
        let spectrum = self.analyzer.analyze(&samples, self.config.sample_rate_hz);

        let label = if self.params.is_undersampled(self.config.sample_rate_hz) {
            "Undersampling"
        } else {
            "Proper Sampling"
        };
        let rate = format_hz(self.config.sample_rate_hz);
        let count = self.config.sample_count;

        self.view = ExperimentView {
            time_points: times
                .iter()
                .zip(&samples)
                .map(|(&t, &amplitude)| [t, amplitude])
                .collect(),
            show_sample_markers: count <= SAMPLE_MARKER_LIMIT,
            time_x_max: times.last().copied().unwrap_or(0.0),
            time_title: format!("Time Domain - {label}: Fs={rate}Hz, N={count}"),
            fit_points: fit::fit_curve(&spectrum.frequencies, &spectrum.magnitudes),
            spectrum_bins: spectrum.points(),
            stem_width_hz: 0.4 * self.config.frequency_resolution_hz(),
            spectrum_x_max: (2.0 * self.params.f2_hz).min(self.config.sample_rate_hz / 2.0),
            spectrum_title: format!("Frequency Domain - {label}: Fs={rate}Hz, N={count}"),
            status: self.ready_status(label),
        };
    }

    fn ready_status(&self, label: &str) -> StatusBarState {
        let tone = if self.params.is_undersampled(self.config.sample_rate_hz) {
            StatusTone::Warning
        } else {
            StatusTone::Info
        };
        let (_, badge_color) = status_badge(tone);
        StatusBarState {
            text: format!(
                "Fs = {} Hz | N = {} | resolution {:.1} Hz | arrows adjust Fs/N, S saves, Q quits",
                format_hz(self.config.sample_rate_hz),
                self.config.sample_count,
                self.config.frequency_resolution_hz()
            ),
            badge_label: label.into(),
            badge_color,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.view.status.text = text.into();
        self.view.status.badge_label = label;
        self.view.status.badge_color = color;
    }
}

impl Default for ExperimentController {
    fn default() -> Self {
        Self::new()
    }
}

/// Broad tone of a status message.
#[derive(Clone, Copy, Debug)]
pub enum StatusTone {
    Info,
    Warning,
    Error,
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning".into(), Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(192, 57, 43)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_is_fully_computed() {
        let controller = ExperimentController::new();
        assert_eq!(controller.view.time_points.len(), 1000);
        assert_eq!(controller.view.spectrum_bins.len(), 500);
        assert!(!controller.view.show_sample_markers);
        assert!(controller.view.fit_points.is_some());
        assert!(controller.view.time_title.contains("Proper Sampling"));
        assert_eq!(controller.view.spectrum_x_max, 2000.0);
    }

    #[test]
    fn sparse_sampling_shows_markers() {
        let mut controller = ExperimentController::new();
        for _ in 0..9 {
            controller.decrease_sample_count();
        }
        assert_eq!(controller.config().sample_count, 100);
        assert!(controller.view.show_sample_markers);
        assert_eq!(controller.view.time_points.len(), 100);
    }

    #[test]
    fn rate_floor_leaves_view_unchanged() {
        let mut controller = ExperimentController::new();
        for _ in 0..7 {
            controller.decrease_sample_rate();
        }
        assert_eq!(controller.config().sample_rate_hz, 500.0);
        let before = controller.view.time_points.clone();
        controller.decrease_sample_rate();
        assert_eq!(controller.config().sample_rate_hz, 500.0);
        assert_eq!(controller.view.time_points, before);
    }

    #[test]
    fn undersampled_rates_are_labelled_in_titles_and_badge() {
        let mut controller = ExperimentController::new();
        for _ in 0..5 {
            controller.decrease_sample_rate();
        }
        assert_eq!(controller.config().sample_rate_hz, 1500.0);
        assert!(controller.view.time_title.contains("Undersampling"));
        assert!(controller.view.spectrum_title.contains("Undersampling"));
        assert_eq!(controller.view.status.badge_label, "Undersampling");
        // Display window shrinks with the Nyquist limit.
        assert_eq!(controller.view.spectrum_x_max, 750.0);
    }

    #[test]
    fn titles_embed_the_current_parameters() {
        let mut controller = ExperimentController::new();
        controller.increase_sample_rate();
        controller.increase_sample_count();
        assert_eq!(
            controller.view.time_title,
            "Time Domain - Proper Sampling: Fs=4500Hz, N=1100"
        );
        assert_eq!(
            controller.view.spectrum_title,
            "Frequency Domain - Proper Sampling: Fs=4500Hz, N=1100"
        );
    }

    #[test]
    fn save_notes_update_the_status_bar() {
        let mut controller = ExperimentController::new();
        controller.note_view_saved(Path::new("experiment_fs_4000_N_1000.png"));
        assert_eq!(controller.view.status.badge_label, "Info");
        assert!(controller.view.status.text.contains("Saved"));
    }
}
