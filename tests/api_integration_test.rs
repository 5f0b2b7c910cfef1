// API integration tests that verify HTTP endpoints
// Drives the Axum router directly with fake providers

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{candidate, ScriptedGeocoder, StaticWeather, COLD_CLEAR_JSON};
use http_body_util::BodyExt; // For `.collect()`
use serde_json::Value;
use tower::ServiceExt; // For `oneshot`
use weather_work_suggestions::api::{create_router, AppState};
use weather_work_suggestions::fetch_error::FetchError;
use weather_work_suggestions::services::WeatherService;

fn app(weather: StaticWeather, geocoder: ScriptedGeocoder) -> axum::Router {
    create_router(AppState {
        weather_service: WeatherService::new(Arc::new(weather)),
        geocoder: Arc::new(geocoder),
    })
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let app = app(StaticWeather::json(COLD_CLEAR_JSON), ScriptedGeocoder::new());
    let (status, body) = get(app, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_weather_report() {
    let app = app(StaticWeather::json(COLD_CLEAR_JSON), ScriptedGeocoder::new());
    let (status, body) = get(app, "/api/v1/weather").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);
    assert_eq!(body["current"]["location_name"], "Oslo");
    assert_eq!(body["current"]["temperature_c"], 5);

    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 5);
    assert_eq!(suggestions[0]["title"], "Perfect Indoor Focus Time");
    assert_eq!(suggestions[0]["priority"], "high");
    assert_eq!(suggestions[0]["category"], "productivity");
    assert_eq!(suggestions[0]["appearance"], "orange");
    assert_eq!(suggestions[1]["priority"], "medium");
    assert_eq!(suggestions[1]["appearance"], "blue");
    let last = suggestions.last().unwrap();
    assert_eq!(last["title"], "Weather-Optimized Workflow");
    assert_eq!(last["appearance"], "green");
}

#[tokio::test]
async fn test_weather_unavailable() {
    let app = app(StaticWeather::failing(), ScriptedGeocoder::new());
    let (status, body) = get(app, "/api/v1/weather").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
    assert!(body["current"].is_null());
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_locations_lists_labelled_options() {
    let geocoder = ScriptedGeocoder::new().respond(Ok(vec![
        candidate("Springfield", "Illinois", "US"),
        candidate("Springfield", "Missouri", "US"),
    ]));
    let app = app(StaticWeather::json(COLD_CLEAR_JSON), geocoder);

    let (status, body) = get(app, "/api/v1/locations?city=Springfield&country=US").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"]["city"], "Springfield");
    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["index"], 0);
    assert_eq!(options[0]["label"], "Springfield, Illinois, US");
    assert_eq!(options[1]["location"]["state"], "Missouri");
}

#[tokio::test]
async fn test_locations_requires_both_fields() {
    let app = app(StaticWeather::json(COLD_CLEAR_JSON), ScriptedGeocoder::new());
    let (status, _) = get(app, "/api/v1/locations?city=Paris").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_locations_provider_failure() {
    let geocoder = ScriptedGeocoder::new().respond(Err(FetchError::Decode("bad".to_string())));
    let app = app(StaticWeather::json(COLD_CLEAR_JSON), geocoder);

    let (status, _) = get(app, "/api/v1/locations?city=Paris&country=FR").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
