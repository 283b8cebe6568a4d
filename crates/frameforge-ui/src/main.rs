#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod paths;
mod picker;
mod theme;

fn main() -> eframe::Result {
    helpers::log::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "frameforge starting");

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("🎞 FrameForge")
            .with_inner_size([980.0, 720.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FrameForge",
        native_options,
        Box::new(|cc| Ok(Box::new(app::FrameForgeApp::new(cc)))),
    )
}
