use std::sync::Arc;

use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::location::{GadgetConfigStore, OpenWeatherGeocoder};
use crate::services::WeatherService;
use crate::weather::OpenWeatherClient;

/// Running HTTP server
pub struct Application {
    pub server_handle: JoinHandle<Result<(), std::io::Error>>,
}

impl Application {
    /// Wire provider clients, the weather service and the router, then spawn the server.
    pub async fn build(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing application components");

        let store = GadgetConfigStore::new(config.gadget_config_path.clone());
        match store.load().await? {
            Some(configuration) => info!("Configured location: {}", configuration.location.label()),
            None => info!(
                "No location configured yet; run configure-location to create {}",
                store.path().display()
            ),
        }

        let weather_client = OpenWeatherClient::new(
            config.openweather_base_url.clone(),
            config.openweather_api_key.clone(),
            store,
        );
        let geocoder = OpenWeatherGeocoder::new(
            config.openweather_base_url.clone(),
            config.openweather_api_key.clone(),
            config.geocoding_result_limit,
        );

        let app_state = AppState {
            weather_service: WeatherService::new(Arc::new(weather_client)),
            geocoder: Arc::new(geocoder),
        };
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let addr = config.server_addr();
        info!("Starting HTTP server on {}", addr);

        let server_handle = tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await
        });

        info!("Application initialized successfully");

        Ok(Self { server_handle })
    }

    pub async fn run_until_stopped(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server_handle.await??;
        Ok(())
    }
}
