//! Helpers to convert domain data into egui-facing view structs.
//!
//! Pure formatting of already-computed values; no business logic.

use crate::classify::{Classification, ClassifyError, format_scalar};
use crate::egui_app::state::{AnalysisState, ControlsState, PlotViewState};
use crate::function::{Parameters, SampleSeries};

/// Mirror the active parameters into slider state.
pub fn controls_state(params: &Parameters) -> ControlsState {
    ControlsState {
        coefficient: params.a,
        basis: params.b,
        x_min: params.x_min.round() as i32,
        x_max: params.x_max.round() as i32,
    }
}

/// Legend label embedding the literal a and b values.
pub fn curve_label(params: &Parameters) -> String {
    format!(
        "f(x) = {} · {}^x",
        format_scalar(params.a),
        format_scalar(params.b)
    )
}

/// Title rendered above the chart.
pub fn plot_title(params: &Parameters) -> String {
    format!("Function graph: {}", curve_label(params))
}

/// Build the plot view from a sampled curve.
pub fn plot_state(params: &Parameters, series: &SampleSeries) -> PlotViewState {
    PlotViewState {
        points: series.points().map(|(x, y)| [x, y]).collect(),
        curve_label: curve_label(params),
        title: plot_title(params),
    }
}

/// Build the analysis section from a classifier verdict.
pub fn analysis_state(classification: &Classification) -> AnalysisState {
    AnalysisState {
        headline: classification.headline.clone(),
        tone: classification.tone,
        basis_note: classification.basis_note.clone(),
        coefficient_note: classification.coefficient_note.clone(),
    }
}

/// Fallback analysis section when classification rejected the inputs.
pub fn analysis_unavailable(error: &ClassifyError) -> AnalysisState {
    AnalysisState {
        headline: format!("Analysis unavailable: {error}"),
        tone: crate::classify::Tone::Warning,
        basis_note: String::new(),
        coefficient_note: String::new(),
    }
}

/// One-line sampling summary for the status bar.
pub fn sampling_summary(params: &Parameters, samples: usize) -> String {
    format!(
        "{samples} points over [{}, {}]",
        format_scalar(params.x_min),
        format_scalar(params.x_max)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn curve_label_embeds_trimmed_values() {
        let params = Parameters {
            a: 2.0,
            b: 0.5,
            ..Parameters::default()
        };
        assert_eq!(curve_label(&params), "f(x) = 2 · 0.5^x");
    }

    #[test]
    fn plot_state_carries_all_sampled_points() {
        let params = Parameters::default();
        let series = SampleSeries::sample(&params);
        let view = plot_state(&params, &series);
        assert_eq!(view.points.len(), series.len());
        assert_eq!(view.points[0], [params.x_min, 1.0 * 2f64.powf(params.x_min)]);
        assert_eq!(view.title, "Function graph: f(x) = 1 · 2^x");
    }

    #[test]
    fn analysis_state_mirrors_classification() {
        let classification = classify(2.0, 3.0).unwrap();
        let view = analysis_state(&classification);
        assert_eq!(view.headline, "Increasing function");
        assert_eq!(view.tone, classification.tone);
        assert!(view.basis_note.contains("greater than 1"));
    }

    #[test]
    fn sampling_summary_names_the_range() {
        let params = Parameters::default();
        assert_eq!(sampling_summary(&params, 400), "400 points over [-2, 3]");
    }
}
