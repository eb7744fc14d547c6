use serde::Deserialize;
use std::path::PathBuf;

/// A user-chosen local image, replaced wholesale on every new selection.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.jpg".to_string());
        Self { path, name }
    }
}

/// Successful response from POST /upload/.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    pub file_id: String,
    pub filename: String,
    pub faces_found: u32,
    #[serde(default)]
    pub ocr_text: String,
    pub qr_url: String,
}

/// Successful response from POST /generate/.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResult {
    pub download: String,
    pub qr: String,
}

/// Error body the service sends on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocType {
    #[default]
    SaleDeed,
    Will,
}

impl DocType {
    pub const ALL: [DocType; 2] = [DocType::SaleDeed, DocType::Will];

    /// Wire value expected by the generate endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::SaleDeed => "sale_deed",
            DocType::Will => "will",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocType::SaleDeed => "Sale Deed",
            DocType::Will => "Will",
        }
    }
}

/// Document parameters, edited in place by the form widgets.
/// `property_address` is always submitted, even for a will.
#[derive(Debug, Clone, Default)]
pub struct GenerationForm {
    pub doc_type: DocType,
    pub owner_name: String,
    pub property_address: String,
}
