//! Shared state types for the egui UI.

use crate::classify::Tone;
use crate::egui_app::ui::style;
use crate::function::Parameters;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub controls: ControlsState,
    pub plot: PlotViewState,
    pub analysis: AnalysisState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            controls: ControlsState::default(),
            plot: PlotViewState::default(),
            analysis: AnalysisState::default(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Adjust the sliders to explore f(x) = a · b^x".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Current slider values, mirrored from the active [`Parameters`].
///
/// The x-range sliders are integer-valued in the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlsState {
    pub coefficient: f64,
    pub basis: f64,
    pub x_min: i32,
    pub x_max: i32,
}

impl Default for ControlsState {
    fn default() -> Self {
        let params = Parameters::default();
        Self {
            coefficient: params.a,
            basis: params.b,
            x_min: params.x_min.round() as i32,
            x_max: params.x_max.round() as i32,
        }
    }
}

/// Display data for the central plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotViewState {
    /// Sampled (x, f(x)) pairs, ready for the plot widget.
    pub points: Vec<[f64; 2]>,
    /// Legend entry carrying the literal a and b values.
    pub curve_label: String,
    /// Title rendered above the chart.
    pub title: String,
}

/// Classification headline and rationale shown under the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisState {
    pub headline: String,
    pub tone: Tone,
    pub basis_note: String,
    pub coefficient_note: String,
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self {
            headline: String::new(),
            tone: Tone::Info,
            basis_note: String::new(),
            coefficient_note: String::new(),
        }
    }
}
