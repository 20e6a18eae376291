//! Build-time configuration matrix
//!
//! Every switch here is fixed when the image is built. The orchestrator is
//! handed one immutable [`BuildConfig`] and branches on it; nothing is
//! re-evaluated after power-on.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Listening ports
// ============================================================================

/// Plaintext HTTP port
pub const SERVER_PORT: u16 = 80;

/// HTTPS port used when secure transport is built in
pub const SERVER_SSL_PORT: u16 = 443;

// ============================================================================
// Transport security
// ============================================================================

/// Web server transport variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    /// TLS on [`SERVER_SSL_PORT`] with the bundled certificate and key
    Secure,
    /// Plaintext, but the server is handed empty placeholder credentials
    PlaintextWithPlaceholder,
    /// Plaintext with no credential argument
    Plain,
}

impl Transport {
    /// Resolve the transport from the two security switches.
    ///
    /// Server SSL takes precedence; the client SSL switch only matters when
    /// server SSL is off.
    pub const fn resolve(server_ssl: bool, client_ssl: bool) -> Self {
        if server_ssl {
            Self::Secure
        } else if client_ssl {
            Self::PlaintextWithPlaceholder
        } else {
            Self::Plain
        }
    }

    pub const fn port(self) -> u16 {
        match self {
            Self::Secure => SERVER_SSL_PORT,
            Self::PlaintextWithPlaceholder | Self::Plain => SERVER_PORT,
        }
    }

    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Secure)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::PlaintextWithPlaceholder => "plaintext-with-placeholder",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Build configuration
// ============================================================================

/// The resolved feature matrix for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Start the cloud-platform client before local services
    pub platform: bool,

    /// Web server transport
    pub transport: Transport,
}

impl BuildConfig {
    pub const fn new(platform: bool, transport: Transport) -> Self {
        Self {
            platform,
            transport,
        }
    }

    /// Build from the three raw switches
    pub const fn from_features(platform: bool, server_ssl: bool, client_ssl: bool) -> Self {
        Self::new(platform, Transport::resolve(server_ssl, client_ssl))
    }

    /// The matrix this crate was compiled with (`platform`, `server-ssl`,
    /// `client-ssl` Cargo features).
    pub const fn current() -> Self {
        Self::from_features(
            cfg!(feature = "platform"),
            cfg!(feature = "server-ssl"),
            cfg!(feature = "client-ssl"),
        )
    }

    pub const fn web_server_port(&self) -> u16 {
        self.transport.port()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "platform={} transport={} port={}",
            if self.platform { "on" } else { "off" },
            self.transport,
            self.web_server_port()
        )
    }
}
