/// Failure talking to a weather or geocoding provider.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
    #[error("No location has been configured yet")]
    NotConfigured,
    #[error("Failed to read location configuration: {0}")]
    Config(String),
}
