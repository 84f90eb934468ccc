use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use cryptocalc_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = Config::from_env();
    app_router(build_state(), &config)
}

async fn get(uri: &str) -> (axum::http::StatusCode, Vec<u8>) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_works() {
    let (status, body) = get("/api/healthz").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn readyz_works() {
    let (status, _) = get("/api/readyz").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn calculates_hbar_in_eur() {
    let (status, body) = get("/api/cryptoCurrencies/HBAR/calculations?cryptoAmount=300").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"63.6 EUR");
}

#[tokio::test]
async fn calculates_btc_in_eur() {
    let (status, body) = get("/api/cryptoCurrencies/BTC/calculations?cryptoAmount=2").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"62400.24 EUR");
}

#[tokio::test]
async fn calculates_eth_in_eur() {
    let (status, body) = get("/api/cryptoCurrencies/ETH/calculations?cryptoAmount=10").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"21723.4 EUR");
}

#[tokio::test]
async fn rejects_unsupported_crypto() {
    let (status, body) = get("/api/cryptoCurrencies/DOGE/calculations?cryptoAmount=100").await;
    assert_eq!(status, 400);

    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], 400);
    assert_eq!(error["message"], "Unsupported crypto DOGE");
}

#[tokio::test]
async fn crypto_code_is_case_sensitive() {
    let (status, body) = get("/api/cryptoCurrencies/hbar/calculations?cryptoAmount=300").await;
    assert_eq!(status, 400);

    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["message"], "Unsupported crypto hbar");
}

#[tokio::test]
async fn rejects_missing_amount() {
    let (status, _) = get("/api/cryptoCurrencies/HBAR/calculations").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn rejects_non_numeric_amount() {
    let (status, _) = get("/api/cryptoCurrencies/HBAR/calculations?cryptoAmount=abc").await;
    assert_eq!(status, 400);
}
