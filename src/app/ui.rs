use super::NotaryApp;
use crate::api::{DocType, SelectedFile};
use crate::presenter::{generation_view, upload_view, GenerationView, UploadView};
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 180, 0);

impl NotaryApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Legal Notary Prototype");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Verify documents and generate deeds or wills")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                self.render_upload_section(ui);
                ui.add_space(20.0);
                self.render_generation_section(ui);
                ui.add_space(20.0);
            });
        });
    }

    fn render_upload_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Upload & Verify Document");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("📁 Select Image").clicked() {
                    let picked = FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg"])
                        .pick_file();
                    if let Some(path) = picked {
                        self.upload.select_file(SelectedFile::from_path(path));
                    }
                }
                if let Some(file) = self.upload.selected_file() {
                    ui.label(format!("Selected: {}", file.name));
                }

                let can_upload = !self.upload.in_flight();
                ui.add_enabled_ui(can_upload, |ui| {
                    if ui.button("📤 Upload").clicked() {
                        // Validation failures land in the controller's error slot.
                        let _ = self.upload.upload(&self.client);
                    }
                });
                if self.upload.in_flight() {
                    ui.spinner();
                    ui.label("Uploading...");
                }
            });

            if let Some(error) = self.upload.error() {
                ui.add_space(5.0);
                ui.colored_label(ERROR_COLOR, format!("Upload failed: {}", error));
            }

            if let Some(view) = upload_view(self.upload.result()) {
                ui.add_space(10.0);
                Self::render_upload_result(ui, &view);
            }
        });
    }

    fn render_upload_result(ui: &mut egui::Ui, view: &UploadView) {
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("File ID:").strong());
            ui.label(&view.file_id);
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Filename:").strong());
            ui.label(&view.filename);
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Faces found:").strong());
            ui.label(view.faces_found.to_string());
        });

        ui.add_space(8.0);
        ui.label(RichText::new("OCR text (truncated):").strong());
        egui::ScrollArea::vertical()
            .id_source("ocr_preview")
            .max_height(160.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&view.ocr_preview).monospace());
            });

        ui.add_space(8.0);
        ui.label(RichText::new("QR:").strong());
        ui.add(
            egui::Image::from_uri(&view.qr_url)
                .fit_to_exact_size(egui::vec2(150.0, 150.0)),
        );
    }

    fn render_generation_section(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Generate Document");
            ui.add_space(8.0);

            let form = self.generation.form_mut();
            egui::ComboBox::from_label("Type")
                .selected_text(form.doc_type.label())
                .show_ui(ui, |ui| {
                    for doc_type in DocType::ALL {
                        ui.selectable_value(&mut form.doc_type, doc_type, doc_type.label());
                    }
                });

            ui.add_space(5.0);
            ui.add(
                egui::TextEdit::singleline(&mut form.owner_name)
                    .hint_text("Owner / Testator name"),
            );
            ui.add_space(5.0);
            ui.add(
                egui::TextEdit::singleline(&mut form.property_address)
                    .hint_text("Property Address (if sale deed)"),
            );

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let can_generate = !self.generation.in_flight();
                ui.add_enabled_ui(can_generate, |ui| {
                    if ui.button("📄 Generate").clicked() {
                        let _ = self.generation.generate(&self.client);
                    }
                });
                if self.generation.in_flight() {
                    ui.spinner();
                    ui.label("Generating...");
                }
            });

            if let Some(error) = self.generation.error() {
                ui.add_space(5.0);
                ui.colored_label(ERROR_COLOR, format!("Generate failed: {}", error));
            }

            if let Some(view) = generation_view(self.generation.result()) {
                ui.add_space(10.0);
                Self::render_generation_result(ui, &view);
            }
        });
    }

    fn render_generation_result(ui: &mut egui::Ui, view: &GenerationView) {
        ui.separator();
        ui.colored_label(SUCCESS_COLOR, "Document generated");

        ui.horizontal(|ui| {
            ui.label(RichText::new("Download:").strong());
            ui.hyperlink(&view.download);
            if ui.button("Open").clicked() {
                if let Err(e) = open::that(&view.download) {
                    eprintln!("Failed to open download link: {}", e);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new("QR:").strong());
            ui.hyperlink(&view.qr);
        });
        ui.add(
            egui::Image::from_uri(&view.qr)
                .fit_to_exact_size(egui::vec2(150.0, 150.0)),
        );
    }
}
