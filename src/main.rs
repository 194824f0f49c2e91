#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::Path;

use shape_paint::{EditorConfig, PaintApp};

const CONFIG_FILE: &str = "shape_paint.json";

fn main() -> eframe::Result {
    let config_path = Path::new(CONFIG_FILE);
    let (config, config_error) = match EditorConfig::load_or_default(config_path) {
        Ok(config) if config_path.exists() => (Some(config), None),
        Ok(_) => (None, None),
        Err(err) => (None, Some(err)),
    };

    let filter = config
        .as_ref()
        .map_or_else(|| EditorConfig::default().log_filter, |c| c.log_filter.clone());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Some(err) = config_error {
        log::warn!("ignoring {CONFIG_FILE}: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shape Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
