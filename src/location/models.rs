use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One possible match returned by geocoding for a city/country query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl LocationCandidate {
    /// Display label: "{name}, {state}, {country}".
    ///
    /// Candidates without a state get the two-part "{name}, {country}" instead,
    /// so labels are not always three comma-separated parts.
    pub fn label(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}, {}", self.name, state, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}

/// The persisted result of a finished location setup session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GadgetConfiguration {
    pub location: LocationCandidate,
    pub configured_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_state() {
        let candidate = LocationCandidate {
            name: "Springfield".to_string(),
            state: Some("Illinois".to_string()),
            country: "US".to_string(),
            latitude: 39.8,
            longitude: -89.6,
        };
        assert_eq!(candidate.label(), "Springfield, Illinois, US");
    }

    #[test]
    fn test_label_without_state() {
        let candidate = LocationCandidate {
            name: "Paris".to_string(),
            state: None,
            country: "FR".to_string(),
            latitude: 48.85,
            longitude: 2.35,
        };
        assert_eq!(candidate.label(), "Paris, FR");
    }

    #[test]
    fn test_deserialize_provider_shape() {
        let json = r#"{"name":"Paris","local_names":{"fr":"Paris"},"lat":48.8588897,"lon":2.3200410,"country":"FR","state":"Ile-de-France"}"#;
        let candidate: LocationCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.latitude, 48.8588897);
        assert_eq!(candidate.longitude, 2.3200410);
        assert_eq!(candidate.state.as_deref(), Some("Ile-de-France"));
    }
}
