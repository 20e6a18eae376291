/// Collaborator traits the bootstrap drives
///
/// Each trait is the narrow slice of a driver or service that power-on needs:
/// one initializer. Implementations return quickly and defer long-running work
/// (accepting connections, answering discovery probes) to their own scheduling.
/// None of them report failure back; a subsystem that cannot start is
/// responsible for its own logging.
use crate::credentials::Credentials;
use crate::serial::BaudRate;

/// Console output for human-readable boot lines
pub trait DiagnosticSink {
    /// Write one line. Fire-and-forget: delivery is not checked.
    fn emit(&mut self, line: &str);
}

/// Client for the remote management platform
pub trait PlatformClient {
    fn init(&mut self);
}

/// UART driver
pub trait SerialPort {
    /// Configure the receive and transmit line rates
    fn init(&mut self, rx: BaudRate, tx: BaudRate);
}

/// Local-network "find me" responder
pub trait DiscoveryBroadcaster {
    fn init(&mut self);
}

/// Embedded HTTP(S) server
pub trait WebServer {
    /// Start listening on `port`.
    ///
    /// `credentials` is `None` on plain builds, the empty placeholder pair on
    /// placeholder builds, and the bundled material on secure builds.
    fn init(&mut self, port: u16, credentials: Option<&Credentials<'_>>);
}

/// Owner of the TLS material compiled into the image
pub trait CredentialStore {
    fn bundled(&self) -> Credentials<'_>;
}

/// Static credentials, e.g. from `include_bytes!`
impl CredentialStore for Credentials<'_> {
    fn bundled(&self) -> Credentials<'_> {
        *self
    }
}

/// Borrowed collaborators for one boot.
///
/// The caller owns every subsystem; the bootstrap only borrows them while it
/// starts them, so they keep running after it returns.
pub struct Subsystems<'a> {
    pub diagnostics: &'a mut dyn DiagnosticSink,
    pub platform: &'a mut dyn PlatformClient,
    pub serial: &'a mut dyn SerialPort,
    pub discovery: &'a mut dyn DiscoveryBroadcaster,
    pub web_server: &'a mut dyn WebServer,
    pub credentials: &'a dyn CredentialStore,
}
