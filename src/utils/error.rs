use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderApiError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl OrderApiError {
    /// HTTP status reported by the upstream platform, when the error came
    /// from a remote response at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            OrderApiError::ApiError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderApiError>;
