//! egui renderer for the application UI.

use crate::egui_app::controller::AppController;
use eframe::egui::{self, Vec2};

mod analysis_panel;
mod chrome;
mod controls_panel;
mod plot_view;
pub mod style;

/// Smallest window that still fits the controls and the chart.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(880.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AppController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, restoring the last-used parameters.
    ///
    /// A broken config file is not fatal: the app starts from defaults
    /// and surfaces the problem in the status bar.
    pub fn new() -> Self {
        let mut controller = AppController::new();
        if let Err(err) = controller.load_configuration() {
            tracing::warn!("Falling back to default parameters: {err}");
            controller.set_status(
                format!("Could not load saved settings: {err}"),
                style::StatusTone::Warning,
            );
        }
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        self.render_plot(ui);
        ui.add_space(10.0);
        self.render_analysis(ui);
    }
}

impl Default for EguiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("function_controls")
            .resizable(false)
            .min_width(250.0)
            .max_width(290.0)
            .show(ctx, |ui| self.render_controls_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_center(ui);
        });
    }
}
