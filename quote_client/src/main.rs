//! Quote Client binary: asks the fetcher for the current USD-BRL bid and writes
//! `Dólar: {bid}` to `cotacao.txt`.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://192.168.0.10:8080 --output ./cotacao.txt
//! ```
//!
//! Any failure (timeout, unreachable fetcher, bad payload, write error) is
//! logged and ends the process with a non-zero status.
use clap::Parser;
use log::error;
use quote_client::QuoteClient;
use quote_client::args::Args;
use quote_common::{QuoteError, Result};

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let http = reqwest::Client::builder().build()?;
    let client = QuoteClient::new(http, args.server_url.trim());
    if let Err(e) = client.run(&args.output_path()).await {
        error!("Failed to fetch and save bid from {}: {}", client.endpoint(), e);
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
