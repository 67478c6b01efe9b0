#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based sampling experiment UI.

use eframe::egui;
use samplescope::egui_app::ui::{ExperimentApp, MIN_VIEWPORT_SIZE};
use samplescope::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1120.0, 680.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Samplescope",
        native_options,
        Box::new(|_cc| Ok(Box::new(ExperimentApp::new()))),
    )?;
    Ok(())
}
