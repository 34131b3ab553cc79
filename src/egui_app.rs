//! egui application modules: controller, state, view model, and renderer.
pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
