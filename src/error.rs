// src/error.rs
use thiserror::Error;

/// Why one bootstrap candidate was rejected.
///
/// These never escape a refresh cycle: the fetcher logs them and moves on
/// to the next candidate path.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad cookie header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data at {0}")]
    Empty(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
