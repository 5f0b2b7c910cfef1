// Weather readings: provider payloads, validation, and the canonical snapshot
// consumed by the suggestion engine.

pub mod normalizer;
pub mod provider;
pub mod snapshot;

pub use normalizer::{normalize, normalize_at, MalformedWeatherData, RawWeatherPayload};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use snapshot::WeatherSnapshot;
