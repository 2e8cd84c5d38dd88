//! Shared networking constants, deadlines and file names used by fetcher and client.
use std::time::Duration;

/// TCP port the fetcher listens on.
pub const FETCHER_PORT: u16 = 8080;
/// The single route served by the fetcher.
pub const QUOTE_PATH: &str = "/cotacao";
/// Third-party endpoint returning the latest USD-BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Key the upstream API wraps the USD-BRL quote in.
pub const UPSTREAM_PAIR_KEY: &str = "USDBRL";

/// Budget for the fetcher's call to the upstream API.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);
/// Budget for a single persistence attempt. Kept tight on purpose.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);
/// Budget for the client's call to the fetcher. Must exceed `UPSTREAM_TIMEOUT`.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// File the client writes the bid to, relative to its working directory.
pub const OUTPUT_FILE: &str = "cotacao.txt";
/// Embedded database file used when persistence is enabled.
pub const DB_FILE: &str = "cotacao.db";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Base URL of a fetcher running on this machine with the default port.
pub fn local_fetcher_url() -> String {
    format!("http://{}", addr("localhost", FETCHER_PORT))
}
