use super::style;
use super::*;
use crate::function::{
    BASIS_RANGE, BASIS_STEP, COEFFICIENT_RANGE, COEFFICIENT_STEP, X_MAX_RANGE, X_MIN_RANGE,
};
use eframe::egui::{RichText, Slider, SliderClamping, Ui};

impl EguiApp {
    pub(super) fn render_controls_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.label(
            RichText::new("Function controls")
                .strong()
                .color(palette.text_primary),
        );
        ui.label(
            RichText::new("See how the coefficient and basis shape the curve.")
                .color(palette.text_muted),
        );
        ui.add_space(8.0);

        let mut coefficient = self.controller.ui.controls.coefficient;
        let slider = Slider::new(&mut coefficient, COEFFICIENT_RANGE)
            .step_by(COEFFICIENT_STEP)
            .fixed_decimals(1)
            .text("Coefficient (a)")
            .clamping(SliderClamping::Always);
        if ui.add(slider).changed() {
            self.controller.set_coefficient(coefficient);
        }

        let mut basis = self.controller.ui.controls.basis;
        let slider = Slider::new(&mut basis, BASIS_RANGE)
            .step_by(BASIS_STEP)
            .fixed_decimals(1)
            .text("Basis (b)")
            .clamping(SliderClamping::Always);
        if ui.add(slider).changed() {
            self.controller.set_basis(basis);
        }
        ui.label(
            RichText::new("The basis stays above 0; growth needs b > 1, decay 0 < b < 1.")
                .color(palette.text_muted),
        );

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        let mut x_min = self.controller.ui.controls.x_min;
        let slider = Slider::new(&mut x_min, X_MIN_RANGE)
            .text("X minimum")
            .clamping(SliderClamping::Always);
        if ui.add(slider).changed() {
            self.controller.set_x_min(f64::from(x_min));
        }

        let mut x_max = self.controller.ui.controls.x_max;
        let slider = Slider::new(&mut x_max, X_MAX_RANGE)
            .text("X maximum")
            .clamping(SliderClamping::Always);
        if ui.add(slider).changed() {
            self.controller.set_x_max(f64::from(x_max));
        }

        ui.add_space(12.0);
        if ui.button("Reset to defaults").clicked() {
            self.controller.reset_parameters();
        }
    }
}
