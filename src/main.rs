mod api;
mod app;
mod controller;
mod error;
mod presenter;

use app::NotaryApp;
use eframe::CreationContext;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Legal Notary Client",
        options,
        Box::new(|cc: &CreationContext| Box::new(NotaryApp::new(cc))),
    )
}
