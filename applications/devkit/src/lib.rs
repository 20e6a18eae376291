//! Beacon Devkit
//!
//! Host-side power-on hook for Beacon firmware. Wires host stand-ins for
//! every subsystem, loads the TLS material a secure image would bundle, and
//! runs the same bootstrap the device runs.

pub mod board;
pub mod config;
pub mod credentials;
pub mod error;

pub use board::{Board, BoardReport};
pub use config::DevkitConfig;
pub use credentials::FileCredentialStore;
pub use error::{DevkitError, Result};

use beacon_core::{BootPlan, Bootstrap, BuildConfig, CredentialStore, Credentials, SdkVersion};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Run the power-on sequence for `build` against host stand-ins.
///
/// Secure builds read their certificate and key first; a missing or empty
/// file fails here, before anything boots. The board is returned so callers
/// can inspect what each stand-in was started with.
pub fn boot<W: Write>(settings: &DevkitConfig, build: BuildConfig, console: W) -> Result<Board<W>> {
    settings.validate(&build)?;

    let store = if build.transport.is_secure() {
        Some(FileCredentialStore::from_settings(&settings.credentials)?)
    } else {
        None
    };
    // Never read on plaintext builds
    let unused = Credentials::placeholder();
    let credentials: &dyn CredentialStore = match &store {
        Some(store) => store,
        None => &unused,
    };

    info!(%build, "Powering on");

    let mut board = Board::new(console);
    Bootstrap::new(build, board.subsystems(credentials)).run_startup();

    Ok(board)
}

/// Resolved build and boot order, as printed by `beacon-devkit plan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub version: SdkVersion,
    pub build: BuildConfig,
    pub plan: BootPlan,
}

impl PlanReport {
    pub fn new(build: BuildConfig) -> Self {
        Self {
            version: SdkVersion::CURRENT,
            build,
            plan: BootPlan::resolve(&build, SdkVersion::CURRENT),
        }
    }

    /// Human-readable rendering, one step per line
    pub fn render(&self) -> String {
        let mut out = format!("SDK {} ({})\n", self.version, self.build);
        for (i, step) in self.plan.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        out
    }
}
