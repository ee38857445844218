//! Common error type and alias.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("OpenRouter API key not configured")]
    MissingApiKey,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] turso::Error),

    #[error("store error: {0}")]
    Store(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a live generation was abandoned in favour of the fallback text.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("OpenRouter API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request to OpenRouter failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("could not decode OpenRouter response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("OpenRouter response had no message content")]
    EmptyChoices,
}
