mod app;
mod charts;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::LaunchDashApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    log::debug!("{config:?}");

    let mut state = AppState::new(config.clone());
    if let Some(path) = &config.data_path {
        let dataset = data::loader::load_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        state.set_dataset(dataset);
    } else {
        log::info!(
            "No dataset given; pass a path or set {} (or use File → Open…)",
            config::DATA_ENV_VAR
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 850.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
