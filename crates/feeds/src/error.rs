//! Error types for upstream API clients.

use thiserror::Error;

/// Errors that can occur while talking to the upstream HTTP APIs.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("currency {0} missing from conversion rates")]
    MissingRate(&'static str),
}
