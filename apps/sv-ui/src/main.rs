#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::collapsible_if)]

mod app;
mod views;

use app::StructviewApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 850.0])
            .with_title("structview"),
        ..Default::default()
    };

    eframe::run_native(
        "structview",
        options,
        Box::new(|cc| Ok(Box::new(StructviewApp::new(cc, initial_file)))),
    )
}
