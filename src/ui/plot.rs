use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::series_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Density plot (central panel)
// ---------------------------------------------------------------------------

/// Render every visible trace as a line with circle markers.
pub fn density_plot(ui: &mut Ui, state: &AppState) {
    let profile = &state.profile;

    if profile.traces.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No series selected");
        });
        return;
    }

    Plot::new("density_plot")
        .legend(Legend::default())
        .x_axis_label(profile.field.axis_label())
        .y_axis_label("Density")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in state.visible_traces() {
                let color = series_color(trace.index);
                let name = trace.legend_name();
                let points = profile.points(trace);

                // Same name for line and markers so the legend shows one entry.
                let line = Line::new(PlotPoints::from(points.clone()))
                    .name(&name)
                    .color(color)
                    .width(1.5);
                let markers = Points::new(PlotPoints::from(points))
                    .name(&name)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0);

                plot_ui.line(line);
                plot_ui.points(markers);
            }
        });
}
