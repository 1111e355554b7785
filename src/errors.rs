use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewInsightsError {
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("API returned an error: {0}")]
    ApiError(String),

    #[error("invalid data format: {0}")]
    InvalidDataFormat(String),
}

// Result alias with the crate-wide error type.
pub type Result<T> = std::result::Result<T, ReviewInsightsError>;
