//! Error types for Beacon value constructors

use thiserror::Error;

/// Result type alias using `BeaconError`
pub type Result<T> = std::result::Result<T, BeaconError>;

/// Errors raised while building boot values.
///
/// The orchestrator itself never returns these; they come from parsing and
/// validating the values it is constructed from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeaconError {
    /// The UART driver has no divisor for this rate
    #[error("Unsupported baud rate: {0}")]
    UnsupportedBaudRate(u32),

    /// Version string is not `major.minor.revision`
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// Bundled TLS material must not be empty
    #[error("Empty credential: {0}")]
    EmptyCredential(&'static str),
}

impl BeaconError {
    /// Create an invalid version error
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        Self::InvalidVersion(msg.into())
    }
}
