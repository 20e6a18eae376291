//! SDK version reported in the power-on banner

use crate::error::{BeaconError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-component SDK version (`major.minor.revision`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SdkVersion {
    pub major: u16,
    pub minor: u16,
    pub revision: u16,
}

impl SdkVersion {
    /// Version this image was built from, taken from the package version.
    pub const CURRENT: Self = Self::new(
        parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
        parse_component(env!("CARGO_PKG_VERSION_MINOR")),
        parse_component(env!("CARGO_PKG_VERSION_PATCH")),
    );

    pub const fn new(major: u16, minor: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// The console line printed first thing at power-on
    pub fn banner(&self) -> String {
        format!("SDK version:{}", self)
    }
}

impl Default for SdkVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl FromStr for SdkVersion {
    type Err = BeaconError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u16> {
            parts
                .next()
                .filter(|p| !p.is_empty())
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| BeaconError::invalid_version(s))
        };

        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(BeaconError::invalid_version(s));
        }
        Ok(version)
    }
}

// Cargo guarantees these env vars are plain decimal digits.
const fn parse_component(digits: &str) -> u16 {
    let bytes = digits.as_bytes();
    let mut value: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u16;
        i += 1;
    }
    value
}
