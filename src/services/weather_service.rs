use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::suggestions::{evaluate, Category, Priority, Suggestion};
use crate::weather::{normalize_at, RawWeatherPayload, WeatherProvider, WeatherSnapshot};

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Display fields for the current reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub heading: String,
    pub icon_url: String,
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub humidity_percent: u8,
    pub conditions: String,
}

/// A suggestion as rendered on a card, with its priority badge colour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionCard {
    pub category: Category,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub appearance: &'static str,
}

impl From<Suggestion> for SuggestionCard {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            appearance: suggestion.priority.appearance(),
            category: suggestion.category,
            icon: suggestion.icon,
            title: suggestion.title,
            description: suggestion.description,
            priority: suggestion.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub available: bool,
    pub current: Option<CurrentConditions>,
    pub suggestions: Vec<SuggestionCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WeatherReport {
    fn unavailable(reason: String) -> Self {
        Self {
            available: false,
            current: None,
            suggestions: Vec::new(),
            error: Some(reason),
        }
    }
}

#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the current weather once and derive suggestions from it.
    ///
    /// Provider or validation failures give an unavailable report with no
    /// suggestions.
    #[instrument(skip(self))]
    pub async fn current_report(&self) -> WeatherReport {
        match self.provider.fetch_current_weather().await {
            Ok(raw) => Self::build_report(&raw, Local::now().date_naive()),
            Err(e) => {
                warn!("Weather fetch failed: {}", e);
                WeatherReport::unavailable(format!("weather unavailable: {e}"))
            }
        }
    }

    pub fn build_report(raw: &RawWeatherPayload, today: NaiveDate) -> WeatherReport {
        let snapshot = match normalize_at(raw, today) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Discarding malformed weather payload: {}", e);
                return WeatherReport::unavailable(format!("weather unavailable: {e}"));
            }
        };

        let suggestions = evaluate(&snapshot);
        info!(
            "Generated {} suggestion(s) for {}",
            suggestions.len(),
            snapshot.location_name
        );

        WeatherReport {
            available: true,
            current: Some(Self::current_conditions(&snapshot)),
            suggestions: suggestions.into_iter().map(SuggestionCard::from).collect(),
            error: None,
        }
    }

    fn current_conditions(snapshot: &WeatherSnapshot) -> CurrentConditions {
        CurrentConditions {
            location_name: snapshot.location_name.clone(),
            heading: format!(
                "{} {} Weather",
                weather_emoji(&snapshot.condition_primary),
                snapshot.location_name
            ),
            icon_url: icon_url(&snapshot.icon_id),
            temperature_c: round_half_up(snapshot.temperature_c),
            feels_like_c: round_half_up(snapshot.feels_like_c),
            humidity_percent: snapshot.humidity_percent,
            conditions: capitalize_first(&snapshot.condition_description),
        }
    }
}

/// Heading glyph for a condition category; first match wins.
pub fn weather_emoji(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    if condition.contains("rain") {
        "🌧️"
    } else if condition.contains("storm") || condition.contains("thunder") {
        "⛈️"
    } else if condition.contains("snow") {
        "❄️"
    } else if condition.contains("cloud") {
        "☁️"
    } else if condition.contains("clear") || condition.contains("sun") {
        "☀️"
    } else {
        "🌤️"
    }
}

pub fn icon_url(icon_id: &str) -> String {
    format!("{ICON_URL_BASE}/{icon_id}@2x.png")
}

/// Round to the nearest integer with halves going up (-2.5 becomes -2).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
