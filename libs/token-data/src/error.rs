use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} responded with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to decode provider payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field `{0}` in provider payload")]
    MissingField(String),

    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid address: `{0}`")]
    InvalidAddress(String),

    #[error("Missing `{0}` environment variable")]
    MissingEnvVar(String),

    #[error("Invalid value for `{0}` environment variable")]
    InvalidConfig(String),
}

impl DataError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}
