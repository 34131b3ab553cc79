//! Maintains app state and bridges the function core to the egui UI.
//!
//! Every slider change runs one full recomputation pass: clamp the
//! parameters, resample the curve, reclassify, refresh the view state,
//! and persist. There is no cross-pass state beyond the parameters
//! themselves.

use crate::classify::classify;
use crate::config;
use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use crate::function::{Parameters, SampleSeries};

/// Owns the active parameters and everything derived from them.
pub struct AppController {
    pub ui: UiState,
    params: Parameters,
    series: SampleSeries,
}

impl AppController {
    pub fn new() -> Self {
        let params = Parameters::default();
        let series = SampleSeries::sample(&params);
        let mut controller = Self {
            ui: UiState::default(),
            params,
            series,
        };
        controller.refresh();
        controller
    }

    /// Restore the last-used parameters from the config file.
    ///
    /// Out-of-range values are clamped; the restored state is not written
    /// back until the user changes something.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let cfg = config::load_or_default()?;
        self.params = Parameters::from(cfg.parameters).clamped();
        self.refresh();
        Ok(())
    }

    /// The parameters driving the current pass.
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// The curve sampled from the current parameters.
    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn set_coefficient(&mut self, a: f64) {
        self.apply(Parameters { a, ..self.params });
    }

    pub fn set_basis(&mut self, b: f64) {
        self.apply(Parameters { b, ..self.params });
    }

    pub fn set_x_min(&mut self, x_min: f64) {
        self.apply(Parameters {
            x_min,
            ..self.params
        });
    }

    pub fn set_x_max(&mut self, x_max: f64) {
        self.apply(Parameters {
            x_max,
            ..self.params
        });
    }

    /// Put every slider back to its default position.
    pub fn reset_parameters(&mut self) {
        self.apply(Parameters::default());
    }

    fn apply(&mut self, params: Parameters) {
        let params = params.clamped();
        if params == self.params {
            return;
        }
        self.params = params;
        self.refresh();
        self.persist();
    }

    /// One recomputation-and-refresh pass over the derived state.
    fn refresh(&mut self) {
        self.series = SampleSeries::sample(&self.params);
        self.ui.controls = view_model::controls_state(&self.params);
        self.ui.plot = view_model::plot_state(&self.params, &self.series);
        self.ui.analysis = match classify(self.params.a, self.params.b) {
            Ok(classification) => view_model::analysis_state(&classification),
            Err(error) => {
                // Unreachable through the sliders; a clamp bug would land here.
                tracing::warn!("Classification rejected clamped parameters: {error}");
                view_model::analysis_unavailable(&error)
            }
        };
        self.set_status(
            view_model::sampling_summary(&self.params, self.series.len()),
            StatusTone::Info,
        );
    }

    fn persist(&mut self) {
        let cfg = config::AppConfig {
            parameters: self.params.into(),
        };
        if let Err(error) = config::save(&cfg) {
            tracing::warn!("Failed to save config: {error}");
            self.set_status(format!("Failed to save settings: {error}"), StatusTone::Error);
        }
    }

    /// Update the footer badge and text.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState {
            text: text.into(),
            badge_label: style::status_badge_label(tone).to_string(),
            badge_color: style::status_badge_color(tone),
        };
    }

    /// Open the `.expolab` config directory in the OS file explorer.
    pub fn open_config_folder(&mut self) {
        match crate::app_dirs::app_root_dir() {
            Ok(path) => {
                if let Err(err) = open::that(&path) {
                    self.set_status(
                        format!("Could not open config folder {}: {err}", path.display()),
                        StatusTone::Error,
                    );
                }
            }
            Err(err) => {
                self.set_status(
                    format!("Could not resolve config folder: {err}"),
                    StatusTone::Error,
                );
            }
        }
    }

    /// Open the log directory in the OS file explorer.
    pub fn open_logs_folder(&mut self) {
        match crate::app_dirs::logs_dir() {
            Ok(path) => {
                if let Err(err) = open::that(&path) {
                    self.set_status(
                        format!("Could not open logs folder {}: {err}", path.display()),
                        StatusTone::Error,
                    );
                }
            }
            Err(err) => {
                self.set_status(
                    format!("Could not resolve logs folder: {err}"),
                    StatusTone::Error,
                );
            }
        }
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}
