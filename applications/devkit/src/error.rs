/// Devkit error types
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DevkitError>;

#[derive(Debug, Error)]
pub enum DevkitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read credential file {}: {source}", .path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] beacon_core::BeaconError),
}

impl From<config::ConfigError> for DevkitError {
    fn from(err: config::ConfigError) -> Self {
        DevkitError::Config(err.to_string())
    }
}
