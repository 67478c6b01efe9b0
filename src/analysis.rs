//! Numeric core of the sampling experiment.
/// Smooth fit curves over discrete spectra.
pub mod fit;
/// Synthesis of the analytic two-tone signal.
pub mod signal;
/// One-sided magnitude spectrum computation.
pub mod spectrum;
