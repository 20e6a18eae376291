//! Boot plan: the ordered steps a build configuration resolves to
//!
//! Resolution is pure. [`BootPlan::resolve`] decides which steps run and in
//! what order; the orchestrator then walks the plan and calls collaborators.

use crate::config::{BuildConfig, Transport};
use crate::credentials::CredentialMode;
use crate::serial::{BaudRate, CONSOLE_BAUD_RATE};
use crate::version::SdkVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One power-on activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum BootStep {
    /// Print the SDK version banner
    EmitVersion { version: SdkVersion },
    /// Start the cloud-platform client
    InitPlatform,
    /// Configure the console UART
    InitSerial { rx: BaudRate, tx: BaudRate },
    /// Start answering discovery probes
    InitDiscovery,
    /// Start the web server
    InitWebServer {
        port: u16,
        credentials: CredentialMode,
    },
}

impl fmt::Display for BootStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmitVersion { version } => write!(f, "emit version {}", version),
            Self::InitPlatform => write!(f, "platform init"),
            Self::InitSerial { rx, tx } => write!(f, "uart init {}/{}", rx, tx),
            Self::InitDiscovery => write!(f, "discovery init"),
            Self::InitWebServer { port, credentials } => {
                write!(f, "web server init on port {}", port)?;
                match credentials {
                    CredentialMode::None => Ok(()),
                    CredentialMode::Placeholder => write!(f, " with placeholder credentials"),
                    CredentialMode::Bundled => write!(f, " with bundled credentials"),
                }
            }
        }
    }
}

/// Ordered list of boot steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootPlan {
    steps: Vec<BootStep>,
}

impl BootPlan {
    /// Resolve the activation order for `config`.
    ///
    /// Always: version banner first, UART and discovery unconditionally,
    /// exactly one web server start last. The platform client, when built
    /// in, starts right after the banner.
    pub fn resolve(config: &BuildConfig, version: SdkVersion) -> Self {
        let mut steps = Vec::with_capacity(5);

        steps.push(BootStep::EmitVersion { version });

        if config.platform {
            steps.push(BootStep::InitPlatform);
        }

        steps.push(BootStep::InitSerial {
            rx: CONSOLE_BAUD_RATE,
            tx: CONSOLE_BAUD_RATE,
        });
        steps.push(BootStep::InitDiscovery);

        let credentials = match config.transport {
            Transport::Secure => CredentialMode::Bundled,
            Transport::PlaintextWithPlaceholder => CredentialMode::Placeholder,
            Transport::Plain => CredentialMode::None,
        };
        steps.push(BootStep::InitWebServer {
            port: config.web_server_port(),
            credentials,
        });

        Self { steps }
    }

    pub fn steps(&self) -> &[BootStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BootStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The web server start, which every plan ends with
    pub fn web_server_step(&self) -> Option<&BootStep> {
        self.steps
            .iter()
            .find(|step| matches!(step, BootStep::InitWebServer { .. }))
    }
}

impl<'a> IntoIterator for &'a BootPlan {
    type Item = &'a BootStep;
    type IntoIter = std::slice::Iter<'a, BootStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SERVER_PORT, SERVER_SSL_PORT};

    const VERSION: SdkVersion = SdkVersion::new(0, 9, 3);

    #[test]
    fn test_plain_plan() {
        let plan = BootPlan::resolve(&BuildConfig::new(false, Transport::Plain), VERSION);
        assert_eq!(
            plan.steps(),
            &[
                BootStep::EmitVersion { version: VERSION },
                BootStep::InitSerial {
                    rx: BaudRate::B115200,
                    tx: BaudRate::B115200
                },
                BootStep::InitDiscovery,
                BootStep::InitWebServer {
                    port: SERVER_PORT,
                    credentials: CredentialMode::None
                },
            ]
        );
    }

    #[test]
    fn test_platform_follows_banner() {
        let plan = BootPlan::resolve(&BuildConfig::new(true, Transport::Secure), VERSION);
        assert_eq!(plan.len(), 5);
        assert_eq!(plan.steps()[1], BootStep::InitPlatform);
        assert_eq!(
            plan.web_server_step(),
            Some(&BootStep::InitWebServer {
                port: SERVER_SSL_PORT,
                credentials: CredentialMode::Bundled
            })
        );
    }

    #[test]
    fn test_placeholder_plan() {
        let plan = BootPlan::resolve(
            &BuildConfig::new(false, Transport::PlaintextWithPlaceholder),
            VERSION,
        );
        assert_eq!(
            plan.steps().last(),
            Some(&BootStep::InitWebServer {
                port: SERVER_PORT,
                credentials: CredentialMode::Placeholder
            })
        );
    }

    #[test]
    fn test_step_display() {
        assert_eq!(
            BootStep::InitSerial {
                rx: BaudRate::B115200,
                tx: BaudRate::B115200
            }
            .to_string(),
            "uart init 115200/115200"
        );
        assert_eq!(
            BootStep::InitWebServer {
                port: 443,
                credentials: CredentialMode::Bundled
            }
            .to_string(),
            "web server init on port 443 with bundled credentials"
        );
    }

    #[test]
    fn test_plan_serializes_tagged_steps() {
        let plan = BootPlan::resolve(&BuildConfig::new(false, Transport::Plain), VERSION);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["steps"][0]["step"], "emit-version");
        assert_eq!(json["steps"][1]["rx"], 115_200);
        assert_eq!(json["steps"][3]["credentials"], "none");
    }
}
