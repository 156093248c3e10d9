use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::charts::ScatterChart;

const ROW_HEIGHT: f32 = 18.0;

/// Annotated rows behind the scatter chart.
pub fn records_table(ui: &mut Ui, chart: &ScatterChart) {
    let records = &chart.records;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Flight",
                "Launch Site",
                "Payload Mass (kg)",
                "class",
                "Booster Version",
                "Booster Version Category",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let rec = &records[row.index()];
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(rec.class.to_string());
                });
                row.col(|ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(&rec.booster_version_category);
                });
            });
        });
}
