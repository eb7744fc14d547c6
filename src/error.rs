use thiserror::Error;

/// Everything a controller action can fail with. `Validation` and `Busy` are
/// raised before any request is issued; `Request` covers transport failures and
/// non-2xx responses from the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("a request is already in flight")]
    Busy,

    #[error("{0}")]
    Request(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}
