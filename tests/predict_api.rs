//! Integration tests: drive the axum router end to end
//! Covers /health, /predict with valid and malformed uploads, and
//! concurrent requests sharing the one classifier instance.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use fashion_classifier::config::ServiceConfig;
use fashion_classifier::server::{create_router, AppState};
use fashion_classifier::LABELS;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn test_app() -> axum::Router {
    // Small input size keeps the random-weight forward pass fast
    let config = ServiceConfig {
        image_size: 32,
        head_units: 16,
        ..ServiceConfig::default()
    };
    let state = Arc::new(AppState::new(config).unwrap());
    create_router(state)
}

/// Encode a solid-color PNG in memory
fn png_bytes(r: u8, g: u8, b: u8) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(48, 48, image::Rgb([r, g, b]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn multipart_body(field: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn predict_request(field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, filename, bytes)))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_predict_valid_image() {
    let app = test_app();
    let response = app
        .oneshot(predict_request("file", "shirt.png", &png_bytes(200, 30, 30)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["filename"], "shirt.png");

    let label = json["predicted_class"].as_str().unwrap();
    assert!(LABELS.contains(&label), "unexpected label: {label}");
}

#[tokio::test]
async fn test_predict_garbage_bytes_fails() {
    let app = test_app();
    let response = app
        .oneshot(predict_request("file", "noise.bin", &[0xde, 0xad, 0xbe, 0xef]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_predict_missing_file_field() {
    let app = test_app();
    let response = app
        .oneshot(predict_request("image", "shirt.png", &png_bytes(10, 10, 10)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let app = test_app();

    let first = app
        .clone()
        .oneshot(predict_request("file", "dark.png", &png_bytes(5, 5, 5)));
    let second = app
        .clone()
        .oneshot(predict_request("file", "light.png", &png_bytes(250, 250, 250)));

    let (first, second) = tokio::join!(first, second);
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first = response_json(first).await;
    let second = response_json(second).await;

    // Each response carries its own request's filename; no cross-request
    // state leaks through the shared model.
    assert_eq!(first["filename"], "dark.png");
    assert_eq!(second["filename"], "light.png");
    assert!(LABELS.contains(&first["predicted_class"].as_str().unwrap()));
    assert!(LABELS.contains(&second["predicted_class"].as_str().unwrap()));
}
