use async_trait::async_trait;
use tracing::{debug, error, instrument};

use super::normalizer::RawWeatherPayload;
use crate::fetch_error::FetchError;
use crate::location::GadgetConfigStore;

/// Source of the current-conditions payload for the configured location.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_current_weather(&self) -> Result<RawWeatherPayload, FetchError>;
}

/// OpenWeatherMap client for the location persisted in the gadget configuration.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    store: GadgetConfigStore,
}

impl OpenWeatherClient {
    pub fn new(base_url: String, api_key: String, store: GadgetConfigStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            store,
        }
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_for_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawWeatherPayload, FetchError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let lat = latitude.to_string();
        let lon = longitude.to_string();

        debug!("Requesting current weather for ({}, {})", latitude, longitude);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Weather provider returned {}: {}", status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current_weather(&self) -> Result<RawWeatherPayload, FetchError> {
        let configuration = self
            .store
            .load()
            .await
            .map_err(|e| FetchError::Config(e.to_string()))?
            .ok_or(FetchError::NotConfigured)?;

        let location = configuration.location;
        self.fetch_for_coordinates(location.latitude, location.longitude)
            .await
    }
}
