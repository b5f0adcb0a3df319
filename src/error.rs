use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Backend returned status {0}")]
    Status(u16),
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
    #[error("{0}")]
    InvalidDraft(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WatchlistError>;
