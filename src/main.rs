mod app;
mod color;
mod data;
mod state;
mod ui;

use app::FlixboardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Generate the catalog once; the app only ever reads it.
    let catalog = data::generate::generate();
    log::info!(
        "Generated {} titles ({} kinds, {} genres)",
        catalog.len(),
        catalog.kinds.len(),
        catalog.genres.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flixboard – Catalog Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(FlixboardApp::new(catalog)))),
    )
}
