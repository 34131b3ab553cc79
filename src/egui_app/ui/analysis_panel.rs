use super::style;
use super::*;
use eframe::egui::{RichText, Ui};

impl EguiApp {
    pub(super) fn render_analysis(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let analysis = self.controller.ui.analysis.clone();

        ui.label(
            RichText::new("Function analysis")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(4.0);
        style::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(&analysis.headline)
                    .strong()
                    .color(style::tone_color(analysis.tone)),
            );
            if !analysis.basis_note.is_empty() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("• Basis: {}", analysis.basis_note))
                        .color(palette.text_primary),
                );
            }
            if !analysis.coefficient_note.is_empty() {
                ui.label(
                    RichText::new(format!("• Coefficient: {}", analysis.coefficient_note))
                        .color(palette.text_primary),
                );
            }
        });
    }
}
