//! Quote Fetcher: HTTP relay for the current USD-BRL bid.
//!
//! On every request to `/cotacao` the fetcher calls the upstream exchange-rate
//! API under a 200ms budget, answers with `{"bid": "..."}` and, when enabled,
//! stores the full quote in the background under a separate 10ms budget.
//!
//! Building blocks:
//! - `upstream` — `UpstreamClient`, the deadline-bound outbound GET.
//! - `server` — `Fetcher`, its route table and the `serve` loop.
//! - `persist` — best-effort, detached persistence attempts.
//! - `store` — the `QuoteStore` seam with SQLite and in-memory backends.
//! - `config` / `args` — typed settings and the CLI that fills them.
#![warn(missing_docs)]
pub mod args;
pub mod config;
pub mod persist;
pub mod server;
pub mod store;
pub mod upstream;

pub use config::FetcherConfig;
pub use server::{Fetcher, serve};
