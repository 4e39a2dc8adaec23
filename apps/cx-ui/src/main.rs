#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::collapsible_if)]

mod app;
mod views;

use app::ComplexplotApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // Optional data file to open on startup.
    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("complexplot"),
        ..Default::default()
    };

    eframe::run_native(
        "complexplot",
        options,
        Box::new(|cc| Ok(Box::new(ComplexplotApp::new(cc, initial_path)))),
    )
}
