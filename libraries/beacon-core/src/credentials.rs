//! TLS credential material handed to the web server

use crate::error::{BeaconError, Result};
use serde::{Deserialize, Serialize};

/// Certificate and private key, borrowed from whoever owns the bytes.
///
/// Lengths are always the slice lengths, so a buffer and its length can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    certificate: &'a [u8],
    private_key: &'a [u8],
}

impl<'a> Credentials<'a> {
    /// Pair two buffers without checking them.
    pub const fn new(certificate: &'a [u8], private_key: &'a [u8]) -> Self {
        Self {
            certificate,
            private_key,
        }
    }

    /// Stand-in pair for builds that compile encryption out but still hand
    /// the web server a credential argument. Both buffers are empty.
    pub const fn placeholder() -> Self {
        Self::new(&[], &[])
    }

    /// Real bundled material. Neither half may be empty.
    pub fn bundled(certificate: &'a [u8], private_key: &'a [u8]) -> Result<Self> {
        if certificate.is_empty() {
            return Err(BeaconError::EmptyCredential("certificate"));
        }
        if private_key.is_empty() {
            return Err(BeaconError::EmptyCredential("private key"));
        }
        Ok(Self::new(certificate, private_key))
    }

    pub fn certificate(&self) -> &'a [u8] {
        self.certificate
    }

    pub fn certificate_len(&self) -> usize {
        self.certificate.len()
    }

    pub fn private_key(&self) -> &'a [u8] {
        self.private_key
    }

    pub fn private_key_len(&self) -> usize {
        self.private_key.len()
    }

    pub fn is_placeholder(&self) -> bool {
        self.certificate.is_empty() && self.private_key.is_empty()
    }

    pub fn mode(&self) -> CredentialMode {
        if self.is_placeholder() {
            CredentialMode::Placeholder
        } else {
            CredentialMode::Bundled
        }
    }
}

/// What kind of credential argument a web server start receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialMode {
    /// No credential argument at all
    None,
    /// Empty certificate and key
    Placeholder,
    /// Bundled certificate and key from the credential store
    Bundled,
}

impl CredentialMode {
    pub fn of(credentials: Option<&Credentials<'_>>) -> Self {
        credentials.map_or(Self::None, Credentials::mode)
    }
}
