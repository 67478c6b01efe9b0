//! egui renderer for the experiment UI.

use std::path::PathBuf;
use std::sync::Arc;

use crate::egui_app::controller::ExperimentController;
use crate::egui_app::export;
use crate::egui_app::input::InputSnapshot;
use crate::egui_app::state::format_hz;
use eframe::egui::{self, Color32, Frame, RichText, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints, Points, VLine};

/// Smallest window size the layout still works at.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(760.0, 520.0);

const SIGNAL_COLOR: Color32 = Color32::from_rgb(96, 156, 255);
const MARKER_COLOR: Color32 = Color32::from_rgb(220, 80, 60);
const STEM_COLOR: Color32 = Color32::from_rgb(120, 190, 160);
const F1_COLOR: Color32 = Color32::from_rgb(220, 80, 60);
const F2_COLOR: Color32 = Color32::from_rgb(110, 200, 90);

/// Renders the two stacked plots and reacts to keyboard input.
pub struct ExperimentApp {
    controller: ExperimentController,
    visuals_set: bool,
}

impl ExperimentApp {
    /// Create the app with a freshly computed initial view.
    pub fn new() -> Self {
        Self {
            controller: ExperimentController::new(),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Color32::from_rgb(12, 12, 12);
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let input = InputSnapshot::capture(ctx);
        if input.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if input.save {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        }
        if input.arrow_up {
            self.controller.increase_sample_rate();
        }
        if input.arrow_down {
            self.controller.decrease_sample_rate();
        }
        if input.arrow_right {
            self.controller.increase_sample_count();
        }
        if input.arrow_left {
            self.controller.decrease_sample_count();
        }
    }

    /// Persist any screenshot frames the backend delivered this frame.
    fn handle_screenshots(&mut self, ctx: &egui::Context) {
        let frames: Vec<Arc<egui::ColorImage>> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Screenshot { image, .. } => Some(image.clone()),
                    _ => None,
                })
                .collect()
        });
        for frame in frames {
            let path = PathBuf::from(self.controller.screenshot_file_name());
            match export::write_png(&frame, &path) {
                Ok(()) => self.controller.note_view_saved(&path),
                Err(error) => self.controller.note_save_failed(&error),
            }
        }
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(Color32::from_rgb(0, 0, 0)))
            .show(ctx, |ui| {
                let status = &self.controller.view.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(Color32::WHITE));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(Color32::WHITE));
                });
            });
    }

    fn render_plots(&mut self, ctx: &egui::Context) {
        let view = self.controller.view.clone();
        let params = self.controller.params();
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_height = (ui.available_height() / 2.0 - 40.0).max(120.0);

            ui.heading(RichText::new(&view.time_title).color(Color32::WHITE));
            Plot::new("time_domain")
                .height(plot_height)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .x_axis_label("Time (s)")
                .y_axis_label("Amplitude")
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [0.0, -2.5],
                        [view.time_x_max, 2.5],
                    ));
                    plot_ui.line(
                        Line::new("Sampled signal", PlotPoints::from(view.time_points.clone()))
                            .color(SIGNAL_COLOR),
                    );
                    if view.show_sample_markers {
                        plot_ui.points(
                            Points::new("Sample points", PlotPoints::from(view.time_points.clone()))
                                .radius(2.5)
                                .color(MARKER_COLOR),
                        );
                    }
                });

            ui.add_space(10.0);
            ui.heading(RichText::new(&view.spectrum_title).color(Color32::WHITE));
            Plot::new("frequency_domain")
                .height(plot_height)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .x_axis_label("Frequency (Hz)")
                .y_axis_label("Magnitude")
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [0.0, 0.0],
                        [view.spectrum_x_max, 1.1],
                    ));
                    let bars: Vec<Bar> = view
                        .spectrum_bins
                        .iter()
                        .map(|&[frequency, magnitude]| {
                            Bar::new(frequency, magnitude).width(view.stem_width_hz)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new("Magnitude", bars).color(STEM_COLOR));
                    if let Some(fit) = &view.fit_points {
                        plot_ui.line(
                            Line::new("Spectrum fit", PlotPoints::from(fit.clone()))
                                .color(SIGNAL_COLOR),
                        );
                    }
                    plot_ui.vline(
                        VLine::new(format!("f1 = {} Hz", format_hz(params.f1_hz)), params.f1_hz)
                            .color(F1_COLOR)
                            .style(LineStyle::dashed_loose()),
                    );
                    plot_ui.vline(
                        VLine::new(format!("f2 = {} Hz", format_hz(params.f2_hz)), params.f2_hz)
                            .color(F2_COLOR)
                            .style(LineStyle::dashed_loose()),
                    );
                });
        });
    }
}

impl Default for ExperimentApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ExperimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.handle_keys(ctx);
        self.handle_screenshots(ctx);
        self.render_status(ctx);
        self.render_plots(ctx);
    }
}
