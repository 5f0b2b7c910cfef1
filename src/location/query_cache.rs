use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub city: String,
    pub country: String,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.city.is_empty() && !self.country.is_empty()
    }
}

/// Remembers the last submitted query of one setup session so repeated
/// input does not trigger another geocoding lookup.
#[derive(Debug, Default)]
pub struct LocationQueryCache {
    last: Option<LocationQuery>,
}

impl LocationQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// False only when both fields match the remembered query exactly (case-sensitive).
    pub fn should_query(&self, query: &LocationQuery) -> bool {
        match &self.last {
            Some(last) if last == query && query.is_complete() => {
                debug!("Suppressing lookup for repeated query {:?}", query);
                false
            }
            _ => true,
        }
    }

    pub fn remember(&mut self, query: LocationQuery) {
        self.last = Some(query);
    }

    pub fn forget(&mut self) {
        self.last = None;
    }

    pub fn reset(&mut self) {
        self.forget();
    }
}
