mod client;
mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use types::{DocType, GenerationForm, GenerationResult, SelectedFile, UploadResult};
