use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::snapshot::WeatherSnapshot;

const DEFAULT_ICON_ID: &str = "01d";

/// Current-conditions document as returned by the weather provider.
///
/// Every field is optional at the wire level; `normalize` decides which ones
/// are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWeatherPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<RawMain>,
    #[serde(default)]
    pub wind: Option<RawWind>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMain {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWind {
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedWeatherData {
    #[error("weather payload is missing {0}")]
    MissingField(&'static str),
    #[error("weather payload has invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Validate a provider payload into a snapshot, stamping it with today's month.
pub fn normalize(raw: &RawWeatherPayload) -> Result<WeatherSnapshot, MalformedWeatherData> {
    normalize_at(raw, Local::now().date_naive())
}

/// Same as [`normalize`] with an explicit evaluation date.
pub fn normalize_at(
    raw: &RawWeatherPayload,
    today: NaiveDate,
) -> Result<WeatherSnapshot, MalformedWeatherData> {
    let main = raw
        .main
        .as_ref()
        .ok_or(MalformedWeatherData::MissingField("main"))?;

    let temperature_c = main
        .temp
        .ok_or(MalformedWeatherData::MissingField("temperature"))?;
    require_finite("temperature", temperature_c)?;

    let feels_like_c = main.feels_like.unwrap_or(temperature_c);
    require_finite("feels-like temperature", feels_like_c)?;

    let humidity = main
        .humidity
        .ok_or(MalformedWeatherData::MissingField("humidity"))?;
    // Whole percent in 0..=100
    if !humidity.is_finite() || !(0.0..=100.0).contains(&humidity) || humidity.fract() != 0.0 {
        return Err(MalformedWeatherData::InvalidField {
            field: "humidity",
            value: humidity.to_string(),
        });
    }

    let wind_speed_ms = raw.wind.as_ref().and_then(|w| w.speed).unwrap_or(0.0);
    if !wind_speed_ms.is_finite() || wind_speed_ms < 0.0 {
        return Err(MalformedWeatherData::InvalidField {
            field: "wind speed",
            value: wind_speed_ms.to_string(),
        });
    }

    let condition = raw.weather.first();
    let primary_label = condition
        .and_then(|c| c.main.as_deref())
        .filter(|label| !label.trim().is_empty())
        .ok_or_else(|| {
            warn!("Weather payload has no primary condition label");
            MalformedWeatherData::MissingField("condition")
        })?;

    let snapshot = WeatherSnapshot {
        temperature_c,
        feels_like_c,
        humidity_percent: humidity as u8,
        wind_speed_ms,
        condition_primary: primary_label.to_lowercase(),
        condition_description: condition
            .and_then(|c| c.description.clone())
            .unwrap_or_else(|| primary_label.to_string()),
        observed_month: today.month0(),
        location_name: raw.name.clone().unwrap_or_default(),
        icon_id: condition
            .and_then(|c| c.icon.clone())
            .unwrap_or_else(|| DEFAULT_ICON_ID.to_string()),
    };

    debug!(
        "Normalized snapshot: {}°C, {}, humidity {}%, wind {} m/s, month {}",
        snapshot.temperature_c,
        snapshot.condition_primary,
        snapshot.humidity_percent,
        snapshot.wind_speed_ms,
        snapshot.observed_month
    );

    Ok(snapshot)
}

fn require_finite(field: &'static str, value: f64) -> Result<(), MalformedWeatherData> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MalformedWeatherData::InvalidField {
            field,
            value: value.to_string(),
        })
    }
}
