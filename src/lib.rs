//! Library exports for reuse in integration tests and benchmarks.
/// Application directory helpers.
pub mod app_dirs;
/// Analytic classification of the exponential family.
pub mod classify;
/// Persisted application settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Curve sampling and evaluation.
pub mod function;
/// Logging setup.
pub mod logging;
