//! Quote persistence.
//!
//! The fetcher only needs one thing from a store: accept a `Quote` and report
//! success or failure. `QuoteStore` is that seam; `SqliteStore` backs it with an
//! embedded database file and `MemoryStore` keeps records in process for tests.

mod error;
mod memory;
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoredQuote};

use async_trait::async_trait;
use quote_common::Quote;
use std::fmt::Debug;

/// Type alias for `Result<T, StoreError>`
pub type Result<T> = core::result::Result<T, StoreError>;

/// Storage API.
#[async_trait]
pub trait QuoteStore: Debug + Send + Sync {
    /// Writes one quote record.
    async fn save(&self, quote: &Quote) -> Result<()>;
}
