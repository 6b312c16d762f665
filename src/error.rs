//! Error types for the Survivor stats client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no token or user id provided")]
    IdentityMissing,

    #[error("API returned no data")]
    NoData,

    #[error("player token must not be empty")]
    EmptyToken,

    #[error("user id must not be empty")]
    EmptyUserId,
}

impl StatsError {
    /// HTTP status carried by an `Api` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            StatsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
