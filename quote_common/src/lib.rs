//!
//! Common types and utilities shared by the quote fetcher and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `model` — the upstream `Quote` and the `BidResponse` projection.
//! - `deadline` — request-scoped timeouts around outbound calls.
//! - `net` — ports, URLs, budgets and file names.
#![warn(missing_docs)]
pub mod deadline;
pub mod error;
pub mod model;
pub mod net;
pub mod result;

pub use error::QuoteError;
pub use model::{BidResponse, Quote};
pub use result::Result;
