/// Errors surfaced to the UI.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch skip data. Please try again later.")]
    FetchFailed,

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Why a fetch went wrong. Only ever logged; callers see `AppError::FetchFailed`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchFailure {
    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}
