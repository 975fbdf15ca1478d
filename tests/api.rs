//! HTTP endpoint tests.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`; no socket is bound.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use climate_grid::field::{FieldConfig, FieldSynthesizer};
use climate_grid::server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn get(state: AppState, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

async fn get_json(uri: &str) -> Value {
    let (status, _, body) = get(AppState::default(), uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_weather_returns_geojson() {
    let (status, content_type, body) = get(AppState::default(), "/api/weather?timeIndex=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["metadata"]["time"], "Jan 1750");
    assert_eq!(value["metadata"]["timeIndex"], 0);
    assert_eq!(value["metadata"]["units"], "degree C");
    assert_eq!(value["metadata"]["resolution"], "4deg");
    assert_eq!(value["features"].as_array().unwrap().len(), 4140);

    let feature = &value["features"][0];
    assert_eq!(feature["type"], "Feature");
    assert_eq!(feature["geometry"]["type"], "Point");
    assert!(feature["properties"]["temp"].is_f64());
    assert!(feature["properties"]["mag"].is_f64());
}

#[tokio::test]
async fn test_missing_and_malformed_index_use_default() {
    let (_, _, explicit) = get(AppState::default(), "/api/weather?timeIndex=3310").await;

    for uri in [
        "/api/weather",
        "/api/weather?timeIndex=",
        "/api/weather?timeIndex=abc",
        "/api/weather?timeIndex=%20",
        "/api/weather?other=1",
    ] {
        let (status, _, body) = get(AppState::default(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, explicit, "{} should match the default index", uri);
    }
}

#[tokio::test]
async fn test_first_occurrence_wins() {
    let value = get_json("/api/weather?timeIndex=12&timeIndex=0").await;
    assert_eq!(value["metadata"]["time"], "Jan 1751");
}

#[tokio::test]
async fn test_out_of_range_indices_succeed() {
    let value = get_json("/api/weather?timeIndex=-1").await;
    assert_eq!(value["metadata"]["time"], "Dec 1749");
    assert_eq!(value["metadata"]["timeIndex"], -1);

    let value = get_json("/api/weather?timeIndex=999999").await;
    assert_eq!(value["metadata"]["timeIndex"], 999999);
    for feature in value["features"].as_array().unwrap() {
        let mag = feature["properties"]["mag"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&mag));
    }
}

#[tokio::test]
async fn test_lenient_prefix_parsing() {
    let value = get_json("/api/weather?timeIndex=11.7").await;
    assert_eq!(value["metadata"]["time"], "Dec 1750");
}

#[tokio::test]
async fn test_configured_default_index() {
    let mut config = FieldConfig::default();
    config.time.default_time_index = 12;
    let state = AppState::new(FieldSynthesizer::new(config).unwrap());

    let (_, _, body) = get(state, "/api/weather").await;
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["metadata"]["time"], "Jan 1751");
    assert_eq!(value["metadata"]["timeIndex"], 12);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _, _) = get(AppState::default(), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
