//! Library exports for reuse in integration tests.
/// Signal synthesis and spectrum analysis.
pub mod analysis;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
