/// Devkit configuration
///
/// Tells the host harness where to find the TLS material a secure image would
/// have compiled in, and how verbose to be. It never changes the boot matrix;
/// that comes from Cargo features.
use crate::error::{DevkitError, Result};
use beacon_core::BuildConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "beacon.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DevkitConfig {
    #[serde(default)]
    pub credentials: CredentialSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CredentialSettings {
    /// PEM or DER certificate bundled into secure images
    pub certificate_path: Option<PathBuf>,

    /// Private key matching `certificate_path`
    pub private_key_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "beacon_core=info,beacon_devkit=info".to_string()
}

impl DevkitConfig {
    /// Load from a config file and the environment.
    ///
    /// An explicit `path` must exist; without one, `beacon.toml` is read if
    /// present. `BEACON_` variables override the file, with `__` between
    /// nested keys (`BEACON_CREDENTIALS__CERTIFICATE_PATH`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
        };

        settings = settings.add_source(
            config::Environment::with_prefix("BEACON")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Check the settings against the build they will boot
    pub fn validate(&self, build: &BuildConfig) -> Result<()> {
        if !build.transport.is_secure() {
            return Ok(());
        }

        if self.credentials.certificate_path.is_none() {
            return Err(DevkitError::Config(
                "secure transport needs credentials.certificate_path \
                 (set BEACON_CREDENTIALS__CERTIFICATE_PATH)"
                    .to_string(),
            ));
        }

        if self.credentials.private_key_path.is_none() {
            return Err(DevkitError::Config(
                "secure transport needs credentials.private_key_path \
                 (set BEACON_CREDENTIALS__PRIVATE_KEY_PATH)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
