//! Host stand-ins for the device's subsystems
//!
//! Each stand-in remembers how it was started and logs it. None of them open
//! sockets or touch hardware; they exist so the real boot order can run on a
//! workstation.

use beacon_core::{
    BaudRate, CredentialMode, CredentialStore, Credentials, DiagnosticSink,
    DiscoveryBroadcaster, PlatformClient, SerialPort, Subsystems, WebServer,
};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Writes diagnostic lines to a console stream
pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for ConsoleSink<W> {
    fn emit(&mut self, line: &str) {
        // Console writes are unacknowledged on the device too.
        let _ = writeln!(self.out, "{}", line);
    }
}

#[derive(Debug, Default)]
pub struct HostPlatform {
    pub connected: bool,
}

impl PlatformClient for HostPlatform {
    fn init(&mut self) {
        info!("Platform client initialized");
        self.connected = true;
    }
}

#[derive(Debug, Default)]
pub struct HostSerial {
    pub rates: Option<(BaudRate, BaudRate)>,
}

impl SerialPort for HostSerial {
    fn init(&mut self, rx: BaudRate, tx: BaudRate) {
        info!(rx = %rx, tx = %tx, "UART configured");
        self.rates = Some((rx, tx));
    }
}

#[derive(Debug, Default)]
pub struct HostDiscovery {
    pub announcing: bool,
}

impl DiscoveryBroadcaster for HostDiscovery {
    fn init(&mut self) {
        info!("Discovery responder started");
        self.announcing = true;
    }
}

/// What the web server was asked to listen with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listener {
    pub port: u16,
    pub credentials: CredentialMode,
    pub certificate_len: usize,
    pub private_key_len: usize,
}

#[derive(Debug, Default)]
pub struct HostWebServer {
    pub listener: Option<Listener>,
}

impl WebServer for HostWebServer {
    fn init(&mut self, port: u16, credentials: Option<&Credentials<'_>>) {
        let listener = Listener {
            port,
            credentials: CredentialMode::of(credentials),
            certificate_len: credentials.map_or(0, Credentials::certificate_len),
            private_key_len: credentials.map_or(0, Credentials::private_key_len),
        };
        info!(
            port,
            credentials = ?listener.credentials,
            "Web server listening"
        );
        self.listener = Some(listener);
    }
}

/// Every stand-in for one host boot
pub struct Board<W> {
    pub console: ConsoleSink<W>,
    pub platform: HostPlatform,
    pub serial: HostSerial,
    pub discovery: HostDiscovery,
    pub web_server: HostWebServer,
}

impl<W: Write> Board<W> {
    pub fn new(console: W) -> Self {
        Self {
            console: ConsoleSink::new(console),
            platform: HostPlatform::default(),
            serial: HostSerial::default(),
            discovery: HostDiscovery::default(),
            web_server: HostWebServer::default(),
        }
    }

    /// Lend the stand-ins to a bootstrap
    pub fn subsystems<'a>(&'a mut self, credentials: &'a dyn CredentialStore) -> Subsystems<'a> {
        Subsystems {
            diagnostics: &mut self.console,
            platform: &mut self.platform,
            serial: &mut self.serial,
            discovery: &mut self.discovery,
            web_server: &mut self.web_server,
            credentials,
        }
    }

    pub fn report(&self) -> BoardReport {
        BoardReport {
            platform: self.platform.connected,
            uart: self
                .serial
                .rates
                .map(|(rx, tx)| (rx.bits_per_second(), tx.bits_per_second())),
            discovery: self.discovery.announcing,
            web_server: self.web_server.listener,
        }
    }
}

/// Post-boot snapshot of the stand-ins
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    pub platform: bool,
    pub uart: Option<(u32, u32)>,
    pub discovery: bool,
    pub web_server: Option<Listener>,
}
