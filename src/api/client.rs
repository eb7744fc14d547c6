use crate::api::types::{ErrorBody, GenerationForm, GenerationResult, SelectedFile, UploadResult};
use crate::error::ClientError;
use reqwest::multipart;
use std::fs;

/// Address the prototype backend listens on.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for the notary service. Cheap to clone; each in-flight request
/// runs on its own clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST the selected image as multipart under field name `file`.
    pub async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, ClientError> {
        let bytes = fs::read(&file.path)
            .map_err(|e| ClientError::request(format!("failed to read {}: {}", file.name, e)))?;

        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(bytes).file_name(file.name.clone()),
        );

        let response = self
            .http
            .post(format!("{}/upload/", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::request(format!("failed to send request: {}", e)))?;

        Self::parse_response(response).await
    }

    /// POST the document parameters form-encoded. `property_address` goes out
    /// unconditionally; the service decides whether it matters.
    pub async fn generate(&self, form: &GenerationForm) -> Result<GenerationResult, ClientError> {
        let fields = [
            ("doc_type", form.doc_type.as_str()),
            ("owner_name", form.owner_name.as_str()),
            ("property_address", form.property_address.as_str()),
        ];

        let response = self
            .http
            .post(format!("{}/generate/", self.base_url))
            .form(&fields)
            .send()
            .await
            .map_err(|e| ClientError::request(format!("failed to send request: {}", e)))?;

        Self::parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            // Prefer the service's own detail string over a bare status line.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ClientError::Request(detail.unwrap_or_else(|| {
                format!("request failed with status: {}", status)
            })));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::request(format!("failed to parse response: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
