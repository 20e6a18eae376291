//! Bundled TLS material loaded from disk
//!
//! On hardware the certificate and key are compiled into the image. The host
//! harness reads them once before boot and lends them out from here.

use crate::config::CredentialSettings;
use crate::error::{DevkitError, Result};
use beacon_core::{CredentialStore, Credentials};
use std::path::Path;
use tracing::debug;

/// Owns certificate and key bytes for the lifetime of the harness
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    certificate: Vec<u8>,
    private_key: Vec<u8>,
}

impl FileCredentialStore {
    /// Read both files. Empty files are rejected.
    pub fn load(certificate_path: &Path, private_key_path: &Path) -> Result<Self> {
        let certificate = read(certificate_path)?;
        let private_key = read(private_key_path)?;

        Credentials::bundled(&certificate, &private_key)?;

        debug!(
            certificate = %certificate_path.display(),
            certificate_len = certificate.len(),
            private_key_len = private_key.len(),
            "Loaded bundled credentials"
        );

        Ok(Self {
            certificate,
            private_key,
        })
    }

    /// Load from the paths in the devkit settings
    pub fn from_settings(settings: &CredentialSettings) -> Result<Self> {
        match (&settings.certificate_path, &settings.private_key_path) {
            (Some(certificate), Some(private_key)) => Self::load(certificate, private_key),
            _ => Err(DevkitError::Config(
                "certificate_path and private_key_path must both be set".to_string(),
            )),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn bundled(&self) -> Credentials<'_> {
        Credentials::new(&self.certificate, &self.private_key)
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| DevkitError::Credentials {
        path: path.to_path_buf(),
        source,
    })
}
