//! Handler tests for the Products domain
//!
//! These drive the product router over a real MongoDB:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization, including exact decimal prices
//! - HTTP status codes
//!
//! Only the domain router is exercised, not the full application.
//! Each test starts a MongoDB container; run with `cargo test -- --ignored`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestMongo};
use tower::ServiceExt; // For oneshot()

async fn app(mongo: &TestMongo, test_name: &str) -> Router {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repo = MongoProductRepository::new(&mongo.database(&builder.database_name()));
    handlers::router(ProductService::new(repo))
}

fn create_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_then_list_round_trip() {
    let mongo = TestMongo::new().await;
    let app = app(&mongo, "handler_round_trip").await;

    let response = app
        .clone()
        .oneshot(create_request(json!({
            "name": "Samsung Note 20",
            "description": "Note 20",
            "price": 1200
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<ProductResponse> =
        serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(products.len(), 1);
    assert!(!products[0].id.is_empty());
    assert_eq!(products[0].name.as_deref(), Some("Samsung Note 20"));
    assert_eq!(products[0].description.as_deref(), Some("Note 20"));
    assert_eq!(products[0].price.unwrap().to_string(), "1200");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_fields_are_listed_as_null() {
    let mongo = TestMongo::new().await;
    let app = app(&mongo, "handler_missing_fields").await;

    let response = app
        .clone()
        .oneshot(create_request(json!({ "name": "Pixel 9", "price": null })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(list_request()).await.unwrap();
    let products: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();

    assert_eq!(products.as_array().unwrap().len(), 1);
    assert_eq!(products[0]["name"], "Pixel 9");
    assert!(products[0]["description"].is_null());
    assert!(products[0]["price"].is_null());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_two_creates_list_two_distinct_ids() {
    let mongo = TestMongo::new().await;
    let app = app(&mongo, "handler_two_creates").await;
    let builder = TestDataBuilder::from_test_name("handler_two_creates");

    for suffix in ["first", "second"] {
        let response = app
            .clone()
            .oneshot(create_request(json!({
                "name": builder.name("product", suffix),
                "description": suffix,
                "price": 10
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(list_request()).await.unwrap();
    let products: Vec<ProductResponse> =
        serde_json::from_str(&body_text(response.into_body()).await).unwrap();

    assert_eq!(products.len(), 2);
    assert_ne!(products[0].id, products[1].id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_empty_store_returns_empty_array() {
    let mongo = TestMongo::new().await;
    let app = app(&mongo, "handler_empty").await;

    let response = app.oneshot(list_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response.into_body()).await, "[]");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_digits_are_preserved_on_the_wire() {
    let mongo = TestMongo::new().await;
    let app = app(&mongo, "handler_price_digits").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"exact","description":"cents","price":1200.00}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(list_request()).await.unwrap();
    let body = body_text(response.into_body()).await;

    assert!(body.contains(r#""price":1200.00"#), "{body}");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_malformed_json_is_rejected_before_storage() {
    let mongo = TestMongo::new().await;
    let app = app(&mongo, "handler_malformed").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\": \"broken\""))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(error["error"], "JSON_EXTRACTION");

    let response = app.oneshot(list_request()).await.unwrap();
    assert_eq!(body_text(response.into_body()).await, "[]");
}
