use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::geocoding::GeocodingProvider;
use super::models::LocationCandidate;
use super::query_cache::{LocationQuery, LocationQueryCache};
use super::store::{ConfigurationSink, SinkError};
use crate::fetch_error::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerState {
    /// Waiting for both city and country
    Idle,
    Querying(LocationQuery),
    Choosing {
        candidates: Vec<LocationCandidate>,
        selected: Option<usize>,
    },
    /// The last query produced nothing usable; editing the input starts over
    NoMatch,
    Finalized(LocationCandidate),
}

impl ControllerState {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerState::Idle => "idle",
            ControllerState::Querying(_) => "querying",
            ControllerState::Choosing { .. } => "choosing",
            ControllerState::NoMatch => "no_match",
            ControllerState::Finalized(_) => "finalized",
        }
    }
}

/// A selectable entry in the location choice list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationOption {
    pub index: usize,
    pub label: String,
}

#[derive(Error, Debug)]
pub enum ControllerError {
    /// Field-level validation failure shown next to `field`
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("No candidate at index {index} ({available} available)")]
    UnknownCandidate { index: usize, available: usize },

    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    #[error("Location setup is already finalized")]
    SessionFinalized,

    #[error("Location lookup unavailable: {0}")]
    Provider(#[from] FetchError),

    #[error("Failed to store configuration: {0}")]
    Sink(#[from] SinkError),
}

/// Drives one location setup session from free-text input to a persisted choice.
pub struct DisambiguationController<G, S> {
    geocoder: G,
    sink: S,
    cache: LocationQueryCache,
    state: ControllerState,
}

impl<G, S> DisambiguationController<G, S>
where
    G: GeocodingProvider,
    S: ConfigurationSink,
{
    pub fn new(geocoder: G, sink: S) -> Self {
        Self {
            geocoder,
            sink,
            cache: LocationQueryCache::new(),
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Options to present while choosing, in provider order.
    pub fn options(&self) -> Vec<LocationOption> {
        match &self.state {
            ControllerState::Choosing { candidates, .. } => candidates
                .iter()
                .enumerate()
                .map(|(index, candidate)| LocationOption {
                    index,
                    label: candidate.label(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Handle an edit to the city or country field.
    ///
    /// Looks up candidates only when both fields are filled and differ from
    /// the last submitted pair.
    #[instrument(skip(self), fields(state = self.state.name()))]
    pub async fn on_input_changed(
        &mut self,
        city: &str,
        country: &str,
    ) -> Result<(), ControllerError> {
        if matches!(self.state, ControllerState::Finalized(_)) {
            return Err(ControllerError::SessionFinalized);
        }

        let query = LocationQuery::new(city, country);
        if !query.is_complete() {
            if self.state == ControllerState::NoMatch {
                debug!("Input edited after no match, back to idle");
                self.state = ControllerState::Idle;
            }
            return Ok(());
        }

        if !self.cache.should_query(&query) {
            return Ok(());
        }

        self.cache.remember(query.clone());
        self.state = ControllerState::Querying(query.clone());

        match self.geocoder.resolve(&query.city, &query.country).await {
            Ok(candidates) if candidates.is_empty() => {
                info!("No locations found for {}, {}", query.city, query.country);
                self.state = ControllerState::NoMatch;
                Ok(())
            }
            Ok(candidates) => {
                info!(
                    "{} location candidate(s) for {}, {}",
                    candidates.len(),
                    query.city,
                    query.country
                );
                self.state = ControllerState::Choosing {
                    candidates,
                    selected: None,
                };
                Ok(())
            }
            Err(e) => {
                warn!("Geocoding failed for {}, {}: {}", query.city, query.country, e);
                // Let the same input be retried
                self.cache.forget();
                self.state = ControllerState::NoMatch;
                Err(ControllerError::Provider(e))
            }
        }
    }

    pub fn select(&mut self, index: usize) -> Result<(), ControllerError> {
        match &mut self.state {
            ControllerState::Choosing {
                candidates,
                selected,
            } => {
                if index >= candidates.len() {
                    return Err(ControllerError::UnknownCandidate {
                        index,
                        available: candidates.len(),
                    });
                }
                debug!("Selected candidate {}: {}", index, candidates[index].label());
                *selected = Some(index);
                Ok(())
            }
            ControllerState::Finalized(_) => Err(ControllerError::SessionFinalized),
            other => Err(ControllerError::InvalidState {
                action: "select a location",
                state: other.name(),
            }),
        }
    }

    /// Confirm the selected candidate and hand it to the configuration sink.
    ///
    /// The session is finalized before the sink runs, so the sink sees at most
    /// one submission per session even if it fails.
    #[instrument(skip(self), fields(state = self.state.name()))]
    pub async fn submit(&mut self) -> Result<LocationCandidate, ControllerError> {
        let candidate = match &self.state {
            ControllerState::Choosing {
                candidates,
                selected: Some(index),
            } => candidates[*index].clone(),
            ControllerState::Choosing { selected: None, .. } => {
                debug!("Submit without a selected location");
                return Err(ControllerError::Validation {
                    field: "location",
                    message: "Select a location",
                });
            }
            ControllerState::Finalized(_) => return Err(ControllerError::SessionFinalized),
            other => {
                return Err(ControllerError::InvalidState {
                    action: "submit",
                    state: other.name(),
                })
            }
        };

        self.state = ControllerState::Finalized(candidate.clone());
        info!("Location setup finalized with {}", candidate.label());
        self.sink.submit(&candidate).await?;

        Ok(candidate)
    }

    /// Start a fresh session.
    pub fn reset(&mut self) {
        self.cache.reset();
        self.state = ControllerState::Idle;
    }
}
