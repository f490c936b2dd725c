//! HTTP API tests driven through the router in-memory.
//!
//! Each test builds a fresh server; requests against clones of one
//! router share that server's session state, which is how the cart
//! flows are exercised end to end without binding a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use carsales_web::config::StorefrontConfig;
use carsales_web::server::StorefrontServer;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    StorefrontServer::new(StorefrontConfig::default())
        .unwrap()
        .router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_router();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "carsales-web");
}

#[tokio::test]
async fn home_and_contact_pages_serve_html() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert!(html.contains("Find Your Dream Car in India"));
    assert!(html.contains("Featured Cars"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_lists_builtin_listings() {
    let app = test_router();
    let (status, body) = send(&app, Method::GET, "/api/catalog", None).await;
    assert_eq!(status, StatusCode::OK);

    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0]["name"], "2024 Tesla Model 3");
    assert_eq!(listings[0]["price"], 3_499_000);
    assert_eq!(listings[0]["price_display"], "₹34,99,000");
    assert_eq!(listings[1]["mileage"], "1,200 km");
}

#[tokio::test]
async fn single_listing_and_unknown_listing() {
    let app = test_router();

    let (status, body) = send(&app, Method::GET, "/api/catalog/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "2023 BMW M4 Competition");
    assert_eq!(body["price_display"], "₹64,90,000");

    let (status, body) = send(&app, Method::GET, "/api/catalog/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn brands_and_features_endpoints() {
    let app = test_router();

    let (status, body) = send(&app, Method::GET, "/api/brands", None).await;
    assert_eq!(status, StatusCode::OK);
    let brands = body["brands"].as_array().unwrap();
    assert_eq!(brands[0], "All Brands");
    assert_eq!(brands.len(), 13);

    let (status, body) = send(&app, Method::GET, "/api/features", None).await;
    assert_eq!(status, StatusCode::OK);
    let features = body["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["title"], "Verified Dealers");
}

#[tokio::test]
async fn add_opens_cart_and_totals_accumulate() {
    let app = test_router();

    let (status, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["is_open"], false);

    let (status, body) = send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 1}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["count"], 1);
    assert_eq!(body["is_open"], true);

    let (status, body) = send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 2}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["count"], 2);
    assert_eq!(body["total"], 9_989_000);
    assert_eq!(body["total_display"], "₹99,89,000");
}

#[tokio::test]
async fn duplicate_adds_make_separate_lines() {
    let app = test_router();

    send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 1}))).await;
    let (_, body) = send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 1}))).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["total"], 6_998_000);

    // One remove clears both lines of that listing.
    let (status, body) = send(&app, Method::DELETE, "/api/cart/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn add_unknown_listing_is_404_and_cart_untouched() {
    let app = test_router();

    let (status, _) = send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 42}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["is_open"], false);
}

#[tokio::test]
async fn remove_absent_id_is_quiet_noop() {
    let app = test_router();

    send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 3}))).await;
    let (status, body) = send(&app, Method::DELETE, "/api/cart/items/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["total"], 8_590_000);
}

#[tokio::test]
async fn checkout_advances_and_saturates() {
    let app = test_router();
    send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 1}))).await;

    let (_, body) = send(&app, Method::POST, "/api/cart/advance", None).await;
    assert_eq!(body["checkout_step"], 2);
    assert_eq!(body["checkout_step_label"], "Details");
    assert_eq!(body["action_label"], "Continue");

    let (_, body) = send(&app, Method::POST, "/api/cart/advance", None).await;
    assert_eq!(body["checkout_step"], 3);
    assert_eq!(body["action_label"], "Place Order");

    // Place Order presses keep the session at Payment.
    let (_, body) = send(&app, Method::POST, "/api/cart/advance", None).await;
    assert_eq!(body["checkout_step"], 3);
    assert_eq!(body["checkout_step_label"], "Payment");
}

#[tokio::test]
async fn panel_toggle_keeps_contents_and_step() {
    let app = test_router();
    send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 2}))).await;
    send(&app, Method::POST, "/api/cart/advance", None).await;

    let (_, body) = send(&app, Method::PUT, "/api/cart/open", Some(json!({"open": false}))).await;
    assert_eq!(body["is_open"], false);
    assert_eq!(body["count"], 1);
    assert_eq!(body["checkout_step"], 2);

    let (_, body) = send(&app, Method::PUT, "/api/cart/open", Some(json!({"open": true}))).await;
    assert_eq!(body["is_open"], true);
    assert_eq!(body["checkout_step"], 2);
}

#[tokio::test]
async fn search_is_recorded_never_applied() {
    let app = test_router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/search",
        Some(json!({"brand": "Ferrari", "query": "488"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search"]["brand"], "Ferrari");

    // The catalog is exactly as long as before the search.
    let (_, body) = send(&app, Method::GET, "/api/catalog", None).await;
    assert_eq!(body["listings"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, Method::GET, "/api/state", None).await;
    assert_eq!(body["search"]["brand"], "Ferrari");
    assert_eq!(body["search"]["query"], "488");
}

#[tokio::test]
async fn page_switch_leaves_cart_alone() {
    let app = test_router();
    send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 1}))).await;

    let (status, body) = send(&app, Method::PUT, "/api/page", Some(json!({"page": "contact"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "contact");

    let (_, body) = send(&app, Method::GET, "/api/state", None).await;
    assert_eq!(body["page"], "contact");
    assert_eq!(body["cart"]["count"], 1);
}

#[tokio::test]
async fn unknown_route_hits_fallback() {
    let app = test_router();
    let (status, body) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn custom_catalog_file_replaces_listings() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[items]]
id = 21
name = "2019 Suzuki Jimny"
price = 1250000
image = "https://example.com/jimny.jpg"
mileage = "30,000 km"
location = "Jaipur, India"
"#
    )
    .unwrap();

    let cfg = StorefrontConfig {
        listen_addr: "127.0.0.1:8080".to_string(),
        catalog_path: Some(file.path().to_path_buf()),
    };
    let app = StorefrontServer::new(cfg).unwrap().router();

    let (_, body) = send(&app, Method::GET, "/api/catalog", None).await;
    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["id"], 21);
    assert_eq!(listings[0]["price_display"], "₹12,50,000");

    // Built-in ids are gone, so adding one is a 404 now.
    let (status, _) = send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, "/api/cart/items", Some(json!({"id": 21}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_display"], "₹12,50,000");
}
