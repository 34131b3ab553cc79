mod support;

use support::expolab_env::ExpolabEnvGuard;

use expolab::classify::Tone;
use expolab::egui_app::controller::AppController;
use expolab::function::{CURVE_SAMPLES, Parameters};
use tempfile::TempDir;

struct ControllerHarness {
    _config: ExpolabEnvGuard,
    _temp: TempDir,
    pub controller: AppController,
}

impl ControllerHarness {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        let env = ExpolabEnvGuard::set_config_home(config_home);

        let mut controller = AppController::new();
        controller
            .load_configuration()
            .expect("load configuration");

        Self {
            _config: env,
            _temp: temp,
            controller,
        }
    }
}

#[test]
fn defaults_produce_an_increasing_growth_curve() {
    let h = ControllerHarness::new();

    assert_eq!(h.controller.parameters(), Parameters::default());
    assert_eq!(h.controller.series().len(), CURVE_SAMPLES);
    assert_eq!(h.controller.ui.plot.curve_label, "f(x) = 1 · 2^x");
    assert_eq!(h.controller.ui.analysis.headline, "Increasing function");
    assert_eq!(h.controller.ui.analysis.tone, Tone::Success);
    assert_eq!(h.controller.ui.status.text, "400 points over [-2, 3]");
}

#[test]
fn slider_changes_run_a_full_recompute_pass() {
    let mut h = ControllerHarness::new();
    let controller = &mut h.controller;

    controller.set_basis(0.5);
    assert_eq!(controller.ui.analysis.headline, "Decreasing function");
    assert_eq!(controller.ui.analysis.tone, Tone::Error);

    controller.set_coefficient(-2.0);
    assert_eq!(controller.ui.analysis.headline, "Increasing function");
    assert_eq!(controller.ui.analysis.tone, Tone::Success);
    assert_eq!(controller.ui.plot.curve_label, "f(x) = -2 · 0.5^x");

    controller.set_x_min(-4.0);
    controller.set_x_max(2.0);
    let points = &controller.ui.plot.points;
    assert_eq!(points.len(), CURVE_SAMPLES);
    assert_eq!(points[0][0], -4.0);
    assert_eq!(points[CURVE_SAMPLES - 1][0], 2.0);
    assert_eq!(controller.ui.status.text, "400 points over [-4, 2]");
}

#[test]
fn unit_basis_reports_a_constant_function() {
    let mut h = ControllerHarness::new();
    let controller = &mut h.controller;

    controller.set_coefficient(5.0);
    controller.set_basis(1.0);
    assert_eq!(controller.ui.analysis.headline, "Constant function");
    assert_eq!(controller.ui.analysis.tone, Tone::Info);
    assert!(
        controller
            .ui
            .analysis
            .coefficient_note
            .contains("always equal to a = 5")
    );
    assert!(controller.series().ys().iter().all(|&y| y == 5.0));
}

#[test]
fn parameters_survive_a_relaunch() {
    let h = {
        let mut h = ControllerHarness::new();
        h.controller.set_coefficient(-2.5);
        h.controller.set_basis(0.3);
        h.controller.set_x_max(4.0);
        h
    };

    let mut restored = AppController::new();
    restored.load_configuration().expect("reload configuration");
    assert_eq!(restored.parameters().a, -2.5);
    assert_eq!(restored.parameters().b, 0.3);
    assert_eq!(restored.parameters().x_max, 4.0);
    drop(h);
}

#[test]
fn degenerate_zero_range_still_samples_400_points() {
    let mut h = ControllerHarness::new();
    let controller = &mut h.controller;

    controller.set_x_min(0.0);
    controller.set_x_max(0.0);
    let series = controller.series();
    assert_eq!(series.len(), CURVE_SAMPLES);
    assert!(series.xs().iter().all(|&x| x == 0.0));
    // f(0) = a for every sample.
    let a = controller.parameters().a;
    assert!(series.ys().iter().all(|&y| y == a));
}
