use crate::api::{GenerationResult, UploadResult};

/// How much of the extracted text the result area shows.
pub const OCR_PREVIEW_LIMIT: usize = 1000;

/// Shown instead of an empty region when the service extracted nothing.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text extracted)";

/// Display model for the upload result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub file_id: String,
    pub filename: String,
    pub faces_found: u32,
    pub ocr_preview: String,
    pub qr_url: String,
}

/// Display model for the generation result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationView {
    pub download: String,
    pub qr: String,
}

/// Pure mapping from the last stored upload result to its display model.
/// Nothing to show means nothing rendered, never an empty frame.
pub fn upload_view(result: Option<&UploadResult>) -> Option<UploadView> {
    result.map(|r| UploadView {
        file_id: r.file_id.clone(),
        filename: r.filename.clone(),
        faces_found: r.faces_found,
        ocr_preview: ocr_preview(&r.ocr_text),
        qr_url: r.qr_url.clone(),
    })
}

pub fn generation_view(result: Option<&GenerationResult>) -> Option<GenerationView> {
    result.map(|r| GenerationView {
        download: r.download.clone(),
        qr: r.qr.clone(),
    })
}

/// First OCR_PREVIEW_LIMIT characters of the extracted text, or the fixed
/// placeholder when there is nothing to show.
pub fn ocr_preview(ocr_text: &str) -> String {
    if ocr_text.is_empty() {
        return NO_TEXT_PLACEHOLDER.to_string();
    }
    ocr_text.chars().take(OCR_PREVIEW_LIMIT).collect()
}
