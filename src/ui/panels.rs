use eframe::egui::{self, Color32, RichText, Ui};

use crate::charts::{export_charts, ChartExport};
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selector widgets
// ---------------------------------------------------------------------------

/// Render the left panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new("SpaceX Launch Records Dashboard")
                .color(Color32::from_rgb(0x50, 0x3D, 0x36))
                .strong(),
        );
    });
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    if state.dataset.as_ref().is_some_and(|ds| ds.is_empty()) {
        ui.label(RichText::new("The dataset has no launches.").weak());
    }

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let mut picked = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.site.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_query)
                    .hint_text("Launch Sites"),
            );
            for value in state.site_options() {
                let option = SiteSelection::from_value(&value);
                if ui
                    .selectable_label(state.site == option, option.to_string())
                    .clicked()
                {
                    picked = Some(option);
                }
            }
        });
    if let Some(site) = picked {
        state.set_site(site);
    }
    ui.add_space(8.0);

    // ---- Payload range ----
    ui.label("Payload range (Kg):");
    let (min, max) = state.config.payload_domain;
    let step = state.config.payload_step;
    let mut range = state.payload_range;
    ui.add(
        egui::Slider::new(&mut range.low, min..=max)
            .step_by(step)
            .text("from"),
    );
    ui.add(
        egui::Slider::new(&mut range.high, min..=max)
            .step_by(step)
            .text("to"),
    );
    state.set_payload_range(range);

    if range.low > range.high {
        ui.label(RichText::new("Range is inverted: nothing matches.").weak());
    }
    if ui.small_button("Reset to observed").clicked() {
        if let Some((low, high)) = state.dataset.as_ref().and_then(|ds| ds.payload_bounds()) {
            state.set_payload_range(PayloadRange::new(low, high));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export charts…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} visible",
                ds.len(),
                state.visible_count()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Records table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn export_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export charts")
        .set_file_name("charts.json")
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };

    let export = ChartExport {
        site: state.site.value(),
        payload_range: [state.payload_range.low, state.payload_range.high],
        pie: state.pie.as_ref(),
        scatter: state.scatter.as_ref(),
    };
    if let Err(e) = export_charts(&path, &export) {
        log::error!("Failed to export charts: {e:#}");
        state.status_message = Some(format!("Error: {e:#}"));
    }
}
