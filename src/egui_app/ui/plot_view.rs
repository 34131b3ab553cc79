use super::style;
use super::*;
use eframe::egui::{RichText, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

impl EguiApp {
    pub(super) fn render_plot(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let plot = self.controller.ui.plot.clone();

        ui.label(RichText::new(&plot.title).strong().color(palette.text_primary));
        ui.add_space(6.0);

        // Leave room for the analysis section below.
        let plot_height = (ui.available_height() - 190.0).max(240.0);
        let points = PlotPoints::from(plot.points);
        Plot::new("function_plot")
            .height(plot_height)
            .legend(Legend::default())
            .x_axis_label("x")
            .y_axis_label("f(x)")
            .show(ui, |plot_ui| {
                plot_ui.hline(
                    HLine::new("y = 0", 0.0)
                        .color(palette.grid_strong)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.vline(
                    VLine::new("x = 0", 0.0)
                        .color(palette.grid_strong)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.line(
                    Line::new(plot.curve_label, points)
                        .color(palette.accent_ice)
                        .width(2.0),
                );
            });
    }
}
