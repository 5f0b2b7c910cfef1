#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use weather_work_suggestions::fetch_error::FetchError;
use weather_work_suggestions::location::{
    ConfigurationSink, GeocodingProvider, LocationCandidate, SinkError,
};
use weather_work_suggestions::weather::{RawWeatherPayload, WeatherProvider};

pub fn candidate(name: &str, state: &str, country: &str) -> LocationCandidate {
    LocationCandidate {
        name: name.to_string(),
        state: Some(state.to_string()),
        country: country.to_string(),
        latitude: 48.85,
        longitude: 2.35,
    }
}

/// Geocoder that replays queued responses and records every lookup
#[derive(Default)]
pub struct ScriptedGeocoder {
    responses: Mutex<VecDeque<Result<Vec<LocationCandidate>, FetchError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Result<Vec<LocationCandidate>, FetchError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeocodingProvider for ScriptedGeocoder {
    async fn resolve(&self, city: &str, country: &str) -> Result<Vec<LocationCandidate>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((city.to_string(), country.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    submitted: Mutex<Vec<LocationCandidate>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn submitted(&self) -> Vec<LocationCandidate> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigurationSink for RecordingSink {
    async fn submit(&self, candidate: &LocationCandidate) -> Result<(), SinkError> {
        self.submitted.lock().unwrap().push(candidate.clone());
        if self.fail {
            return Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        Ok(())
    }
}

/// Weather provider returning a fixed JSON document, or failing when `None`
pub struct StaticWeather {
    payload: Option<String>,
    pub calls: AtomicUsize,
}

impl StaticWeather {
    pub fn json(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn fetch_current_weather(&self) -> Result<RawWeatherPayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(json) => serde_json::from_str(json).map_err(|e| FetchError::Decode(e.to_string())),
            None => Err(FetchError::Status {
                status: 503,
                body: "upstream down".to_string(),
            }),
        }
    }
}

pub const COLD_CLEAR_JSON: &str = r#"{
    "name": "Oslo",
    "main": {"temp": 5, "feels_like": 2.5, "humidity": 50},
    "wind": {"speed": 2},
    "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}]
}"#;
