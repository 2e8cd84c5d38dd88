//! Quote Fetcher binary.
//!
//! Listens on `0.0.0.0:8080` (see `--bind`) and serves `GET /cotacao`. Logging
//! goes through `env_logger`; set `RUST_LOG=debug` for per-request detail.
//! Ctrl+C stops the listener gracefully.
use clap::Parser;
use log::{error, info};
use quote_common::{QuoteError, Result};
use quote_fetcher::args::Args;
use quote_fetcher::store::{QuoteStore, SqliteStore};
use quote_fetcher::{Fetcher, serve};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let store: Option<Arc<dyn QuoteStore>> = if args.persist {
        info!("Persisting quotes to {}", args.db_path.display());
        Some(Arc::new(SqliteStore::open_lazy(&args.db_path)))
    } else {
        None
    };

    let http = reqwest::Client::builder().build()?;
    let fetcher = Arc::new(Fetcher::new(http, args.fetcher_config(), store));
    let listener = TcpListener::bind(&args.bind).await?;

    serve(listener, fetcher.router(), shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down fetcher..."),
        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
