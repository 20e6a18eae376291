//! Beacon Core
//!
//! Power-on bootstrap for Beacon network devices.
//!
//! This crate is platform-agnostic: it owns the boot order and the build-time
//! feature matrix, and talks to hardware and services only through the
//! collaborator traits in [`subsystems`].
//!
//! # Architecture
//!
//! - **Configuration**: [`BuildConfig`] resolves the `platform`, `server-ssl` and
//!   `client-ssl` Cargo features into one immutable value
//! - **Plan**: [`BootPlan`] turns a configuration into an ordered list of steps
//! - **Orchestrator**: [`Bootstrap`] walks the plan and starts each subsystem
//!
//! # Example
//!
//! ```rust
//! use beacon_core::{
//!     BaudRate, Bootstrap, BuildConfig, Credentials, Subsystems, Transport,
//!     subsystems::{DiagnosticSink, DiscoveryBroadcaster, PlatformClient, SerialPort, WebServer},
//! };
//!
//! struct Console;
//! impl DiagnosticSink for Console {
//!     fn emit(&mut self, line: &str) { println!("{line}"); }
//! }
//!
//! struct Idle;
//! impl PlatformClient for Idle { fn init(&mut self) {} }
//! impl DiscoveryBroadcaster for Idle { fn init(&mut self) {} }
//! impl SerialPort for Idle { fn init(&mut self, _rx: BaudRate, _tx: BaudRate) {} }
//! impl WebServer for Idle {
//!     fn init(&mut self, _port: u16, _credentials: Option<&Credentials<'_>>) {}
//! }
//!
//! let (mut platform, mut serial, mut discovery, mut web) = (Idle, Idle, Idle, Idle);
//! let bundled = Credentials::placeholder();
//!
//! Bootstrap::new(
//!     BuildConfig::new(false, Transport::Plain),
//!     Subsystems {
//!         diagnostics: &mut Console,
//!         platform: &mut platform,
//!         serial: &mut serial,
//!         discovery: &mut discovery,
//!         web_server: &mut web,
//!         credentials: &bundled,
//!     },
//! )
//! .run_startup();
//! ```

#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod credentials;
pub mod error;
pub mod plan;
pub mod serial;
pub mod subsystems;
pub mod version;

// Re-export commonly used types
pub use bootstrap::Bootstrap;
pub use config::{BuildConfig, Transport, SERVER_PORT, SERVER_SSL_PORT};
pub use credentials::{CredentialMode, Credentials};
pub use error::{BeaconError, Result};
pub use plan::{BootPlan, BootStep};
pub use serial::{BaudRate, CONSOLE_BAUD_RATE};
pub use subsystems::{
    CredentialStore, DiagnosticSink, DiscoveryBroadcaster, PlatformClient, SerialPort,
    Subsystems, WebServer,
};
pub use version::SdkVersion;
