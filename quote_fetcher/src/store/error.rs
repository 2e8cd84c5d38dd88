//! Errors raised by quote stores.

/// Errors returned by a [`super::QuoteStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The embedded database failed to open, migrate or write.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store refused the record.
    #[error("store rejected quote: {0}")]
    Rejected(String),
}
