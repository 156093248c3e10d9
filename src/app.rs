use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site dropdown and payload range ----
        egui::SidePanel::left("selector_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: annotated records ----
        if self.state.show_table {
            if let Some(scatter) = &self.state.scatter {
                egui::TopBottomPanel::bottom("records_table")
                    .resizable(true)
                    .default_height(220.0)
                    .show(ctx, |ui| {
                        table::records_table(ui, scatter);
                    });
            }
        }

        // ---- Central panel: pie and scatter charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_panels(ui, &self.state);
        });
    }
}
