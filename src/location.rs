// Location setup: resolving a free-text city/country into one confirmed,
// persisted location.

pub mod controller;
pub mod geocoding;
pub mod models;
pub mod query_cache;
pub mod store;

pub use controller::{ControllerError, ControllerState, DisambiguationController, LocationOption};
pub use geocoding::{GeocodingProvider, OpenWeatherGeocoder};
pub use models::{GadgetConfiguration, LocationCandidate};
pub use query_cache::{LocationQuery, LocationQueryCache};
pub use store::{ConfigurationSink, GadgetConfigStore, SinkError};
