//! Bootstrap orchestrator
//!
//! Runs once at power-on: prints the version banner, then starts each
//! subsystem in a fixed order chosen by the [`BuildConfig`]. There is no
//! return path and no retry. Collaborator failures are the collaborator's
//! business; the bootstrap neither sees nor reacts to them.

use crate::config::BuildConfig;
use crate::credentials::{CredentialMode, Credentials};
use crate::plan::{BootPlan, BootStep};
use crate::subsystems::Subsystems;
use crate::version::SdkVersion;
use tracing::{debug, info};

/// One-shot power-on sequencer
pub struct Bootstrap<'a> {
    config: BuildConfig,
    version: SdkVersion,
    subsystems: Subsystems<'a>,
}

impl<'a> Bootstrap<'a> {
    pub fn new(config: BuildConfig, subsystems: Subsystems<'a>) -> Self {
        Self {
            config,
            version: SdkVersion::CURRENT,
            subsystems,
        }
    }

    /// Report a different SDK version in the banner
    #[must_use]
    pub fn with_version(mut self, version: SdkVersion) -> Self {
        self.version = version;
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Steps `run_startup` will execute, without executing them
    pub fn plan(&self) -> BootPlan {
        BootPlan::resolve(&self.config, self.version)
    }

    /// Bring every subsystem online.
    ///
    /// Consumes the bootstrap so the sequence can only run once per value.
    pub fn run_startup(self) {
        let plan = self.plan();
        let Self {
            config,
            subsystems: mut s,
            ..
        } = self;

        // Owned here and lent to the web server; never read on plaintext builds.
        let placeholder = Credentials::placeholder();

        for step in &plan {
            debug!(step = %step, "boot step");

            match *step {
                BootStep::EmitVersion { version } => {
                    s.diagnostics.emit(&version.banner());
                }
                BootStep::InitPlatform => s.platform.init(),
                BootStep::InitSerial { rx, tx } => s.serial.init(rx, tx),
                BootStep::InitDiscovery => s.discovery.init(),
                BootStep::InitWebServer { port, credentials } => match credentials {
                    CredentialMode::Bundled => {
                        let bundled = s.credentials.bundled();
                        debug!(
                            certificate_len = bundled.certificate_len(),
                            private_key_len = bundled.private_key_len(),
                            "handing bundled credentials to web server"
                        );
                        s.web_server.init(port, Some(&bundled));
                    }
                    CredentialMode::Placeholder => s.web_server.init(port, Some(&placeholder)),
                    CredentialMode::None => s.web_server.init(port, None),
                },
            }
        }

        info!(%config, steps = plan.len(), "subsystems started");
    }
}
