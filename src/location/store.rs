use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::models::{GadgetConfiguration, LocationCandidate};

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Configuration file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives the confirmed location once a setup session finishes.
#[async_trait]
pub trait ConfigurationSink: Send + Sync {
    async fn submit(&self, candidate: &LocationCandidate) -> Result<(), SinkError>;
}

/// JSON file holding the configured gadget location.
#[derive(Debug, Clone)]
pub struct GadgetConfigStore {
    path: PathBuf,
}

impl GadgetConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `None` when nothing has been configured yet.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Option<GadgetConfiguration>, SinkError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let configuration: GadgetConfiguration = serde_json::from_slice(&bytes)?;
                debug!("Loaded configured location {}", configuration.location.label());
                Ok(Some(configuration))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No gadget configuration file present");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, configuration), fields(path = %self.path.display()))]
    pub async fn save(&self, configuration: &GadgetConfiguration) -> Result<(), SinkError> {
        let json = serde_json::to_vec_pretty(configuration)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        info!("Saved gadget location {}", configuration.location.label());
        Ok(())
    }
}

#[async_trait]
impl ConfigurationSink for GadgetConfigStore {
    async fn submit(&self, candidate: &LocationCandidate) -> Result<(), SinkError> {
        let configuration = GadgetConfiguration {
            location: candidate.clone(),
            configured_at: Utc::now(),
        };
        self.save(&configuration).await
    }
}
