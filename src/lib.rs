pub mod api;
pub mod app;
pub mod config;
pub mod fetch_error;
pub mod location;
pub mod services;
pub mod suggestions;
pub mod weather;
