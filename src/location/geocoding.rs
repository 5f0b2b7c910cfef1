use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

use super::models::LocationCandidate;
use crate::fetch_error::FetchError;

/// Resolves free-text city/country input into candidate locations.
///
/// Candidate order is significant: callers select by position.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    async fn resolve(&self, city: &str, country: &str) -> Result<Vec<LocationCandidate>, FetchError>;
}

#[derive(Clone)]
pub struct OpenWeatherGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    limit: u32,
}

impl OpenWeatherGeocoder {
    pub fn new(base_url: String, api_key: String, limit: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            limit,
        }
    }
}

#[async_trait]
impl GeocodingProvider for OpenWeatherGeocoder {
    #[instrument(skip(self), fields(base_url = %self.base_url, limit = self.limit))]
    async fn resolve(&self, city: &str, country: &str) -> Result<Vec<LocationCandidate>, FetchError> {
        let url = format!("{}/geo/1.0/direct", self.base_url);
        let q = format!("{city},{country}");
        let limit = self.limit.to_string();

        debug!("Sending geocoding request for {}", q);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", q.as_str()),
                ("limit", limit.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Geocoding provider returned {}: {}", status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let candidates: Vec<LocationCandidate> =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;

        info!("Geocoding returned {} candidate(s) for {}", candidates.len(), q);
        Ok(candidates)
    }
}
