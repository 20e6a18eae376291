//! Recording collaborators shared by the integration tests.
//!
//! Every fake appends to one journal so tests can assert on the global call
//! order across subsystems.

#![allow(dead_code)]

use beacon_core::{
    BaudRate, Bootstrap, BuildConfig, CredentialMode, CredentialStore, Credentials,
    DiagnosticSink, DiscoveryBroadcaster, PlatformClient, SdkVersion, SerialPort, Subsystems,
    WebServer,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const CERTIFICATE: &[u8] = include_bytes!("../fixtures/server.crt");
pub const PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/server.key");

/// A collaborator call as observed by the fakes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Diagnostic(String),
    Platform,
    Serial {
        rx: BaudRate,
        tx: BaudRate,
    },
    Discovery,
    WebServer {
        port: u16,
        mode: CredentialMode,
        certificate: Vec<u8>,
        private_key: Vec<u8>,
    },
}

impl Call {
    pub fn is_web_server(&self) -> bool {
        matches!(self, Call::WebServer { .. })
    }
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

pub struct Recorder(Journal);

impl DiagnosticSink for Recorder {
    fn emit(&mut self, line: &str) {
        self.0.borrow_mut().push(Call::Diagnostic(line.to_string()));
    }
}

impl PlatformClient for Recorder {
    fn init(&mut self) {
        self.0.borrow_mut().push(Call::Platform);
    }
}

impl SerialPort for Recorder {
    fn init(&mut self, rx: BaudRate, tx: BaudRate) {
        self.0.borrow_mut().push(Call::Serial { rx, tx });
    }
}

impl DiscoveryBroadcaster for Recorder {
    fn init(&mut self) {
        self.0.borrow_mut().push(Call::Discovery);
    }
}

impl WebServer for Recorder {
    fn init(&mut self, port: u16, credentials: Option<&Credentials<'_>>) {
        let (certificate, private_key) = credentials
            .map(|c| (c.certificate().to_vec(), c.private_key().to_vec()))
            .unwrap_or_default();
        self.0.borrow_mut().push(Call::WebServer {
            port,
            mode: CredentialMode::of(credentials),
            certificate,
            private_key,
        });
    }
}

/// Credential store backed by the test fixtures
pub struct FixtureStore;

impl CredentialStore for FixtureStore {
    fn bundled(&self) -> Credentials<'_> {
        Credentials::bundled(CERTIFICATE, PRIVATE_KEY).expect("fixtures are non-empty")
    }
}

/// Boot once with `config` and return every collaborator call in order
pub fn boot(config: BuildConfig) -> Vec<Call> {
    boot_with_version(config, SdkVersion::CURRENT)
}

pub fn boot_with_version(config: BuildConfig, version: SdkVersion) -> Vec<Call> {
    let journal: Journal = Rc::default();
    let mut diagnostics = Recorder(Rc::clone(&journal));
    let mut platform = Recorder(Rc::clone(&journal));
    let mut serial = Recorder(Rc::clone(&journal));
    let mut discovery = Recorder(Rc::clone(&journal));
    let mut web_server = Recorder(Rc::clone(&journal));

    Bootstrap::new(
        config,
        Subsystems {
            diagnostics: &mut diagnostics,
            platform: &mut platform,
            serial: &mut serial,
            discovery: &mut discovery,
            web_server: &mut web_server,
            credentials: &FixtureStore,
        },
    )
    .with_version(version)
    .run_startup();

    let calls = journal.borrow().clone();
    calls
}
