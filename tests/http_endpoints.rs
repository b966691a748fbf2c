// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::Router;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use bitcoin_price_exporter::{AppState, Config, MetricsRegistry, PriceResponse, create_router};
use http_body_util::BodyExt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const TICKER_PATH: &str = "/api/v3/ticker/price";

/// Starts a fake upstream on an ephemeral port
async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on
async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn binance_stub(body: &'static str) -> SocketAddr {
    spawn_upstream(Router::new().route(TICKER_PATH, get(move || async move { body }))).await
}

fn make_state(upstream: SocketAddr, probe: SocketAddr) -> Arc<AppState> {
    let config = Config {
        upstream_url: format!("http://{upstream}{TICKER_PATH}?symbol=BTCUSDT"),
        upstream_timeout: Duration::from_secs(5),
        readiness_probe_url: format!("http://{probe}/"),
        readiness_timeout: Duration::from_secs(2),
        ..Config::default()
    };
    Arc::new(AppState::new(config, MetricsRegistry::new()).unwrap())
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::get(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// --- /bitcoin endpoint ---

#[tokio::test]
async fn bitcoin_returns_upstream_price_verbatim() {
    let upstream = binance_stub(r#"{"symbol":"BTCUSDT","price":"67890.12"}"#).await;
    let state = make_state(upstream, upstream);
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/bitcoin").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(ct, "application/json");

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        &body[..],
        br#"{"currency":"USD","price":"67890.12","source":"Binance"}"#
    );
}

#[tokio::test]
async fn bitcoin_keeps_trailing_zeros() {
    let upstream = binance_stub(r#"{"symbol":"BTCUSDT","price":"67890.10000000"}"#).await;
    let app = create_router(make_state(upstream, upstream));

    let (status, body) = get_body(app, "/bitcoin").await;
    assert_eq!(status, StatusCode::OK);
    let price: PriceResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(price.price, "67890.10000000");
}

#[tokio::test]
async fn bitcoin_serves_price_without_symbol() {
    let upstream = binance_stub(r#"{"price":"67890.12"}"#).await;
    let app = create_router(make_state(upstream, upstream));

    let (status, body) = get_body(app, "/bitcoin").await;
    assert_eq!(status, StatusCode::OK);
    let price: PriceResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(price.currency, "USD");
    assert_eq!(price.price, "67890.12");
    assert_eq!(price.source, "Binance");
}

#[tokio::test]
async fn bitcoin_counts_request_before_upstream_answers() {
    let slow = spawn_upstream(Router::new().route(
        TICKER_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            r#"{"symbol":"BTCUSDT","price":"3.0"}"#
        }),
    ))
    .await;
    let state = make_state(slow, slow);

    let in_flight = tokio::spawn(get_body(create_router(state.clone()), "/bitcoin"));
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!in_flight.is_finished());
    assert_eq!(state.metrics.price_requests_total(), 1);

    let (status, _) = in_flight.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.metrics.price_requests_total(), 1);
}

#[tokio::test]
async fn bitcoin_returns_503_when_upstream_refuses_connection() {
    let upstream = unreachable_addr().await;
    let state = make_state(upstream, upstream);
    let app = create_router(state.clone());

    let (status, body) = get_body(app, "/bitcoin").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "upstream price API unavailable");
    assert_eq!(state.metrics.price_requests_total(), 1);
}

#[tokio::test]
async fn bitcoin_returns_500_on_undecodable_body() {
    let upstream = binance_stub("not json at all").await;
    let state = make_state(upstream, upstream);
    let app = create_router(state.clone());

    let (status, body) = get_body(app, "/bitcoin").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "failed to decode upstream price data");
    assert_eq!(state.metrics.price_requests_total(), 1);
}

#[tokio::test]
async fn bitcoin_counter_increments_once_per_call_on_every_path() {
    let good = binance_stub(r#"{"symbol":"BTCUSDT","price":"1.5"}"#).await;
    let state = make_state(good, good);

    for expected in 1..=3 {
        let (status, _) = get_body(create_router(state.clone()), "/bitcoin").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.metrics.price_requests_total(), expected);
    }

    let down = make_state(unreachable_addr().await, good);
    let (status, _) = get_body(create_router(down.clone()), "/bitcoin").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(down.metrics.price_requests_total(), 1);
}

// --- /metrics endpoint ---

#[tokio::test]
async fn metrics_returns_200_with_openmetrics_content_type() {
    let upstream = unreachable_addr().await;
    let app = create_router(make_state(upstream, upstream));

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        ct.contains("openmetrics-text"),
        "Expected OpenMetrics content-type, got: {ct}"
    );
}

#[tokio::test]
async fn metrics_counter_matches_prior_price_calls() {
    let upstream = binance_stub(r#"{"symbol":"BTCUSDT","price":"2.0"}"#).await;
    let state = make_state(upstream, upstream);

    for _ in 0..4 {
        get_body(create_router(state.clone()), "/bitcoin").await;
    }

    let (status, body) = get_body(create_router(state), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("bitcoin_price_requests_total 4"));
    assert!(body.contains("tokio_runtime_workers"));
}

#[tokio::test]
async fn metrics_count_upstream_failures_by_kind() {
    let upstream = binance_stub("{}").await;
    let state = make_state(upstream, upstream);
    get_body(create_router(state.clone()), "/bitcoin").await;

    let (_, body) = get_body(create_router(state), "/metrics").await;
    assert!(body.contains("bitcoin_price_upstream_errors_total{kind=\"decode\"} 1"));
    assert!(body.contains("bitcoin_price_upstream_errors_total{kind=\"unavailable\"} 0"));
    assert!(body.contains("bitcoin_price_requests_total 1"));
}

// --- health endpoints ---

#[tokio::test]
async fn liveness_returns_ok_even_when_everything_is_down() {
    let down = unreachable_addr().await;
    let app = create_router(make_state(down, down));

    let (status, body) = get_body(app, "/healthz/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn readiness_returns_ready_when_probe_host_answers() {
    let probe = spawn_upstream(Router::new().route("/", get(|| async { "hello" }))).await;
    let app = create_router(make_state(unreachable_addr().await, probe));

    let (status, body) = get_body(app, "/healthz/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "READY");
}

#[tokio::test]
async fn readiness_returns_not_ready_when_probe_host_unreachable() {
    let down = unreachable_addr().await;
    let app = create_router(make_state(down, down));

    let (status, body) = get_body(app, "/healthz/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "NOT READY");
}

#[tokio::test]
async fn readiness_returns_not_ready_when_probe_times_out() {
    let slow = spawn_upstream(Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            "late"
        }),
    ))
    .await;
    let app = create_router(make_state(slow, slow));

    let started = std::time::Instant::now();
    let (status, body) = get_body(app, "/healthz/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "NOT READY");
    assert!(started.elapsed() < Duration::from_secs(5));
}

// --- 404 for unknown routes ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let down = unreachable_addr().await;
    let app = create_router(make_state(down, down));

    let resp = app
        .oneshot(Request::get("/unknown").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
