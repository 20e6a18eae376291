//! UART line rates

use crate::error::{BeaconError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line rates the UART driver has clock divisors for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BaudRate {
    B9600,
    B19200,
    B38400,
    B57600,
    /// Boot ROM rate on 26 MHz crystals
    B74880,
    B115200,
    B230400,
    B460800,
    B921600,
}

/// Rate used for the diagnostic console in both directions
pub const CONSOLE_BAUD_RATE: BaudRate = BaudRate::B115200;

impl BaudRate {
    pub const ALL: [Self; 9] = [
        Self::B9600,
        Self::B19200,
        Self::B38400,
        Self::B57600,
        Self::B74880,
        Self::B115200,
        Self::B230400,
        Self::B460800,
        Self::B921600,
    ];

    pub const fn bits_per_second(self) -> u32 {
        match self {
            Self::B9600 => 9_600,
            Self::B19200 => 19_200,
            Self::B38400 => 38_400,
            Self::B57600 => 57_600,
            Self::B74880 => 74_880,
            Self::B115200 => 115_200,
            Self::B230400 => 230_400,
            Self::B460800 => 460_800,
            Self::B921600 => 921_600,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = BeaconError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.bits_per_second() == bps)
            .ok_or(BeaconError::UnsupportedBaudRate(bps))
    }
}

impl From<BaudRate> for u32 {
    fn from(rate: BaudRate) -> Self {
        rate.bits_per_second()
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits_per_second())
    }
}
