//! Error types shared between the fetcher and the client.
//!
//! The `QuoteError` enum unifies the failure cases of the request chain: I/O on
//! the output file, JSON decoding, outbound HTTP, elapsed deadlines and
//! unexpected status codes, so both binaries can propagate a single error type.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by fetcher and client.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Outbound HTTP call failed (connect, send or body read).
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// A deadline elapsed before the named stage completed.
    #[error("{stage} did not complete within {}ms", .budget.as_millis())]
    Timeout {
        /// Short name of the stage that was cut off (e.g. `upstream`).
        stage: &'static str,
        /// Budget the stage was given.
        budget: Duration,
    },

    /// The peer answered with a status other than `200 OK`.
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

impl QuoteError {
    /// Returns `true` if this error is an elapsed deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout { .. })
    }
}
