use serde::Serialize;

/// One fully validated weather reading, used for a single evaluation cycle.
///
/// Only the normalizer builds these, so every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_percent: u8,
    pub wind_speed_ms: f64,
    /// Lower-cased provider category, e.g. "rain", "clear", "clouds"
    pub condition_primary: String,
    pub condition_description: String,
    /// Calendar month (0-11) at evaluation time
    pub observed_month: u32,
    pub location_name: String,
    pub icon_id: String,
}

impl WeatherSnapshot {
    pub fn condition_contains(&self, needle: &str) -> bool {
        self.condition_primary.contains(needle)
    }
}
