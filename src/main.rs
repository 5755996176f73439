#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use hibi::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let loaded: Result<AppConfig, ConfigError> = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&config.log_level);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using default settings");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting hibi");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Hibi"),
        ..Default::default()
    };

    eframe::run_native(
        "Hibi",
        options,
        Box::new(|cc| Ok(Box::new(app::HibiApp::new(cc, config)))),
    )
}
