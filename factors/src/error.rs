use thiserror::Error;
use token_data::DataError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Not enough data: {0}")]
    InsufficientData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-finite raw value for factor `{0}`")]
    NonFinite(&'static str),

    #[error("Missing `{0}` environment variable")]
    MissingEnvVar(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for factor calculations
pub type FactorResult<T> = Result<T, AppError>;
