use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::location::{GeocodingProvider, LocationCandidate, LocationQuery};
use crate::services::{WeatherReport, WeatherService};

#[derive(Clone)]
pub struct AppState {
    pub weather_service: WeatherService,
    pub geocoder: Arc<dyn GeocodingProvider>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationParams {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct LocationChoice {
    pub index: usize,
    pub label: String,
    pub location: LocationCandidate,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub query: LocationQuery,
    pub options: Vec<LocationChoice>,
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .route("/locations", get(get_locations))
        .with_state(state);

    Router::new().nest("/api/v1", api_routes)
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state))]
async fn get_weather(State(state): State<AppState>) -> Json<WeatherReport> {
    debug!("Fetching current weather report");
    let report = state.weather_service.current_report().await;

    if report.available {
        info!("Returning weather report with {} suggestions", report.suggestions.len());
    } else {
        warn!("Returning unavailable weather report");
    }

    Json(report)
}

#[instrument(skip(state), fields(city = %params.city, country = %params.country))]
async fn get_locations(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<LocationsResponse>, StatusCode> {
    let query = LocationQuery::new(params.city.trim(), params.country.trim());
    if !query.is_complete() {
        warn!("Location lookup requires both city and country");
        return Err(StatusCode::BAD_REQUEST);
    }

    let candidates = state
        .geocoder
        .resolve(&query.city, &query.country)
        .await
        .map_err(|e| {
            error!("Failed to resolve {}, {}: {}", query.city, query.country, e);
            StatusCode::BAD_GATEWAY
        })?;

    info!("Resolved {} location option(s)", candidates.len());

    let options = candidates
        .into_iter()
        .enumerate()
        .map(|(index, location)| LocationChoice {
            index,
            label: location.label(),
            location,
        })
        .collect();

    Ok(Json(LocationsResponse { query, options }))
}
