//! Client runs against a real fetcher backed by an in-process upstream stub.

use std::fs;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use quote_client::QuoteClient;
use quote_common::QuoteError;
use quote_fetcher::{Fetcher, FetcherConfig};
use tokio::net::TcpListener;

const UPSTREAM_PATH: &str = "/json/last/USD-BRL";

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Upstream stub whose body can be swapped between requests.
async fn spawn_upstream(body: Arc<Mutex<String>>) -> String {
    let router = Router::new()
        .route(
            UPSTREAM_PATH,
            get(|State(body): State<Arc<Mutex<String>>>| async move {
                let body = body.lock().unwrap().clone();
                ([(CONTENT_TYPE, "application/json")], body)
            }),
        )
        .with_state(body);
    let addr = spawn(router).await;
    format!("http://{}{}", addr, UPSTREAM_PATH)
}

async fn spawn_fetcher(upstream_url: String) -> String {
    let config = FetcherConfig::default().with_upstream_url(upstream_url);
    let fetcher = Arc::new(Fetcher::new(reqwest::Client::new(), config, None));
    format!("http://{}", spawn(fetcher.router()).await)
}

/// Stand-in fetcher answering `/cotacao` after `delay`.
async fn spawn_slow_fetcher(delay: Duration) -> String {
    let router = Router::new().route(
        "/cotacao",
        get(move || async move {
            tokio::time::sleep(delay).await;
            ([(CONTENT_TYPE, "application/json")], r#"{"bid":"9.99"}"#)
        }),
    );
    format!("http://{}", spawn(router).await)
}

fn quote_json(bid: &str) -> String {
    format!(
        r#"{{"bid":"{}","code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","ask":"5.44"}}"#,
        bid
    )
}

#[tokio::test]
async fn writes_bid_relayed_by_fetcher() {
    let body = Arc::new(Mutex::new(quote_json("5.43")));
    let fetcher = spawn_fetcher(spawn_upstream(body).await).await;

    let relayed = reqwest::get(format!("{}/cotacao", fetcher))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(relayed, r#"{"bid":"5.43"}"#);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");
    let bid = QuoteClient::new(reqwest::Client::new(), fetcher)
        .run(&path)
        .await
        .unwrap();

    assert_eq!(bid.bid, "5.43");
    assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.43");
}

#[tokio::test]
async fn second_run_overwrites_file() {
    let body = Arc::new(Mutex::new(quote_json("5.43")));
    let fetcher = spawn_fetcher(spawn_upstream(body.clone()).await).await;
    let client = QuoteClient::new(reqwest::Client::new(), fetcher);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");
    client.run(&path).await.unwrap();

    *body.lock().unwrap() = quote_json("5.5");
    client.run(&path).await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.5");
}

#[tokio::test]
async fn slow_fetcher_aborts_without_creating_file() {
    let fetcher = spawn_slow_fetcher(Duration::from_millis(600)).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");

    let err = QuoteClient::new(reqwest::Client::new(), fetcher)
        .run(&path)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(!path.exists());
}

#[tokio::test]
async fn slow_fetcher_leaves_existing_file_untouched() {
    let fetcher = spawn_slow_fetcher(Duration::from_millis(600)).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");
    fs::write(&path, "Dólar: 5.10").unwrap();

    let result = QuoteClient::new(reqwest::Client::new(), fetcher)
        .run(&path)
        .await;

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.10");
}

#[tokio::test]
async fn fetcher_failure_is_fatal() {
    let body = Arc::new(Mutex::new("not json".to_string()));
    let fetcher = spawn_fetcher(spawn_upstream(body).await).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");

    let err = QuoteClient::new(reqwest::Client::new(), fetcher)
        .run(&path)
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::UnexpectedStatus(500)));
    assert!(!path.exists());
}

#[tokio::test]
async fn malformed_fetcher_payload_is_fatal() {
    let router = Router::new().route("/cotacao", get(|| async { (StatusCode::OK, "{\"price\":1}") }));
    let fetcher = format!("http://{}", spawn(router).await);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");

    let err = QuoteClient::new(reqwest::Client::new(), fetcher)
        .run(&path)
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::SerdeJson(_)));
    assert!(!path.exists());
}

#[tokio::test]
async fn unreachable_fetcher_is_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");

    let err = QuoteClient::new(reqwest::Client::new(), format!("http://{}", addr))
        .run(&path)
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::Http(_)));
    assert!(!path.exists());
}

#[tokio::test]
async fn request_budget_follows_with_timeout() {
    let fetcher = spawn_slow_fetcher(Duration::from_millis(120)).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotacao.txt");

    let err = QuoteClient::new(reqwest::Client::new(), fetcher.clone())
        .with_timeout(Duration::from_millis(30))
        .run(&path)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert!(!path.exists());

    let bid = QuoteClient::new(reqwest::Client::new(), fetcher)
        .run(&path)
        .await
        .unwrap();
    assert_eq!(bid.bid, "9.99");
    assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 9.99");
}
