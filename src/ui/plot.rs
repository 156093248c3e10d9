use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{Legend, Plot, Points};

use crate::charts::{PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::state::AppState;

/// Arc segments per full turn when tessellating pie wedges.
const PIE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Chart panels (central panel)
// ---------------------------------------------------------------------------

/// Render the pie chart above the scatter chart.
pub fn chart_panels(ui: &mut Ui, state: &AppState) {
    let (Some(pie), Some(scatter)) = (&state.pie, &state.scatter) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view launches  (File → Open…)");
        });
        return;
    };

    let pie_height = (ui.available_height() * 0.45).max(180.0);
    ui.allocate_ui(egui::vec2(ui.available_width(), pie_height), |ui: &mut Ui| {
        pie_chart(ui, pie);
    });
    ui.separator();
    scatter_chart(ui, scatter, &state.scatter_colors);
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, chart: &PieChart) {
    ui.strong(chart.title.as_str());

    let total = chart.total();
    if total <= 0.0 {
        ui.label("Nothing to show for this selection.");
        return;
    }

    let colors = ColorMap::new(chart.slices.iter().map(|s| s.label.as_str()));

    ui.horizontal(|ui: &mut Ui| {
        let side = ui.available_height().min(ui.available_width() * 0.6);
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), Sense::hover());
        let center = response.rect.center();
        let radius = side * 0.45;

        let mut start = -TAU / 4.0;
        for slice in &chart.slices {
            let fraction = slice.fraction(total) as f32;
            if fraction <= 0.0 {
                continue;
            }
            let sweep = fraction * TAU;
            let color = colors.color_for(&slice.label);

            // Triangle fan: each triangle is convex even when the wedge is not.
            let steps = ((fraction * PIE_SEGMENTS as f32).ceil() as usize).max(1);
            for i in 0..steps {
                let a0 = start + sweep * i as f32 / steps as f32;
                let a1 = start + sweep * (i + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![center, on_circle(center, radius, a0), on_circle(center, radius, a1)],
                    color,
                    Stroke::NONE,
                ));
            }

            if fraction >= 0.04 {
                let mid = start + sweep / 2.0;
                painter.text(
                    on_circle(center, radius * 0.65, mid),
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", fraction * 100.0),
                    FontId::proportional(12.0),
                    Color32::BLACK,
                );
            }
            start += sweep;
        }

        // Slice labels are distinct, so legend entries line up with slices.
        ui.vertical(|ui: &mut Ui| {
            for ((label, color), slice) in colors.legend_entries().into_iter().zip(&chart.slices) {
                ui.horizontal(|ui: &mut Ui| {
                    ui.colored_label(color, "■");
                    ui.label(format!("{label}  ({})", slice.value));
                });
            }
        });
    });
}

fn on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * egui::vec2(angle.cos(), angle.sin())
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, chart: &ScatterChart, colors: &ColorMap) {
    ui.strong(chart.title.as_str());

    Plot::new("scatter_chart")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points = Points::new(series.points.clone())
                    .name(&series.label)
                    .color(colors.color_for(&series.label))
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}
