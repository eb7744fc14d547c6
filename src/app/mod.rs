mod ui;

use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::controller::{GenerationController, UploadController};
use eframe::{egui, App};

pub struct NotaryApp {
    client: ApiClient,
    upload: UploadController,
    generation: GenerationController,
}

impl NotaryApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        println!("Initializing Legal Notary Client ({})", DEFAULT_BASE_URL);
        // Needed so egui::Image can fetch qr_url over http.
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self {
            client: ApiClient::default(),
            upload: UploadController::new(),
            generation: GenerationController::new(),
        }
    }

    /// Drain completion events from both controllers. They are independent
    /// and may each have a request outstanding.
    fn update_state(&mut self, ctx: &egui::Context) {
        let mut changed = self.upload.poll();
        changed |= self.generation.poll();

        if changed || self.upload.in_flight() || self.generation.in_flight() {
            ctx.request_repaint();
        }
    }
}

impl App for NotaryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
