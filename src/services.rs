pub mod weather_service;

pub use weather_service::{CurrentConditions, SuggestionCard, WeatherReport, WeatherService};
