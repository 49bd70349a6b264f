#![windows_subsystem = "windows"]
mod app;
mod color_processor;
mod error;
mod history;
mod image_io;
mod session;
mod types;
mod ui;

use app::ColorChangerApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([720.0, 480.0])
            .with_drag_and_drop(true)
            .with_icon(egui::IconData::default())
            .with_title("Color Changer"),
        ..Default::default()
    };

    eframe::run_native(
        "Color Changer",
        options,
        Box::new(|cc| Ok(Box::new(ColorChangerApp::new(cc)))),
    )
}
