mod app;
mod command;
mod notify;
mod texture;

use std::path::PathBuf;

use eframe::egui;

pub use command::UiCommand;

const WINDOW_TITLE: &str = "batch-image-cropper";
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1_100.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 360.0];

/// Opens the cropper window, optionally with a batch already loaded.
pub fn run(initial: Vec<PathBuf>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::CropperApp::new(cc, initial)))),
    )
    .map_err(|error| error.to_string())
}
