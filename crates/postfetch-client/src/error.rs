//! Error types for postfetch-client.

use thiserror::Error;

/// Boxed cause from the underlying HTTP client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch data: {0}")]
    Transport(#[source] BoxError),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to read response body: {0}")]
    BodyRead(#[source] BoxError),
}
