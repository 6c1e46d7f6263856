//! End-to-end tests for the price endpoint.
//!
//! Each test drives the real router, with the HTTP client pointed at a local
//! stub standing in for the pricing service - or at an address nothing
//! listens on, for the unreachable scenarios.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use core_config::pricing::PricingConfig;
use domain_catalog::{CreateProduct, ProductRepository, SqlProductRepository};
use domain_pricing::{HttpPricingClient, PriceService, handlers};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

/// Serve `app` on an ephemeral local port, returning its base URL.
async fn spawn_pricing_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An address nothing is listening on.
async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Router under test with one seeded product; returns the seeded id.
async fn test_app(base_url: &str, timeout: Duration) -> (Router, i32) {
    let db = database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repository = SqlProductRepository::new(db.clone());
    let seeded = repository
        .create(CreateProduct {
            name: "iPhone 15 Pro".to_string(),
            description: String::new(),
            base_price: 7000.0,
        })
        .await
        .unwrap();

    let client = HttpPricingClient::new(PricingConfig::new(base_url, timeout));
    let service = PriceService::new(SqlProductRepository::new(db), client);
    (handlers::router(service), seeded.id)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_conversion_success_merges_payload_into_product() {
    let stub = Router::new().route(
        "/convert",
        post(|| async { Json(json!({"converted_amount": 50.0, "currency": "USD"})) }),
    );
    let base_url = spawn_pricing_stub(stub).await;
    let (app, id) = test_app(&base_url, Duration::from_secs(2)).await;

    let response = app
        .oneshot(get(&format!("/{}/price/usd", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "iPhone 15 Pro");
    assert_eq!(body["base_price"], 7000.0);
    assert_eq!(
        body["price_in_currency"],
        json!({"converted_amount": 50.0, "currency": "USD"})
    );
}

#[tokio::test]
async fn test_overrides_reach_the_wire_coerced_and_filtered() {
    // The stub echoes the payload it receives, so the response shows exactly
    // what went over the wire.
    let stub = Router::new().route(
        "/convert",
        post(|Json(payload): Json<Value>| async move { Json(payload) }),
    );
    let base_url = spawn_pricing_stub(stub).await;
    let (app, id) = test_app(&base_url, Duration::from_secs(2)).await;

    let response = app
        .oneshot(get(&format!(
            "/{}/price/usd?admin_fee=not_a_number&volatility_threshold=5&force_panic=YES",
            id
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let payload = body["price_in_currency"].as_object().unwrap();

    assert_eq!(payload["base_price"], 7000.0);
    assert_eq!(payload["target_currency"], "USD");
    assert_eq!(payload["volatility_threshold"], 5.0);
    assert_eq!(payload["force_panic"], true);
    // Unparseable override is dropped, not defaulted and not an error
    assert!(!payload.contains_key("admin_fee"));
    assert!(!payload.contains_key("max_panic_margin"));
}

#[tokio::test]
async fn test_force_panic_is_omitted_when_not_truthy() {
    let stub = Router::new().route(
        "/convert",
        post(|Json(payload): Json<Value>| async move { Json(payload) }),
    );
    let base_url = spawn_pricing_stub(stub).await;
    let (app, id) = test_app(&base_url, Duration::from_secs(2)).await;

    let response = app
        .oneshot(get(&format!("/{}/price/usd?force_panic=maybe", id)))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    let payload = body["price_in_currency"].as_object().unwrap();
    assert!(!payload.contains_key("force_panic"));
}

#[tokio::test]
async fn test_rejection_maps_to_502_with_body_passthrough() {
    let stub = Router::new().route(
        "/convert",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "conversion exploded") }),
    );
    let base_url = spawn_pricing_stub(stub).await;
    let (app, id) = test_app(&base_url, Duration::from_secs(2)).await;

    let response = app
        .oneshot(get(&format!("/{}/price/usd", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BadGateway");
    assert_eq!(body["details"], "conversion exploded");
}

#[tokio::test]
async fn test_unreachable_service_maps_to_503_with_tip() {
    let base_url = unreachable_base_url().await;
    let (app, id) = test_app(&base_url, Duration::from_secs(2)).await;

    let response = app
        .oneshot(get(&format!("/{}/price/usd", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "ServiceUnavailable");
    assert!(body["message"].as_str().unwrap().contains("unreachable"));
    assert!(body["tip"].as_str().unwrap().contains(&base_url));
}

#[tokio::test]
async fn test_slow_service_maps_to_503() {
    let stub = Router::new().route(
        "/convert",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base_url = spawn_pricing_stub(stub).await;
    let (app, id) = test_app(&base_url, Duration::from_millis(200)).await;

    let response = app
        .oneshot(get(&format!("/{}/price/usd", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "ServiceUnavailable");
    assert!(body["tip"].is_string());
}

#[tokio::test]
async fn test_unknown_product_is_404_and_skips_the_network() {
    // Collaborator is down; resolution fails first, so the response is still
    // a clean 404.
    let base_url = unreachable_base_url().await;
    let (app, _id) = test_app(&base_url, Duration::from_secs(2)).await;

    let response = app.oneshot(get("/999999/price/usd")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NotFound");
}
