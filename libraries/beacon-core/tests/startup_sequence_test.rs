//! Boot order tests for the bootstrap orchestrator.
//!
//! Each test boots once against recording collaborators and checks the exact
//! sequence of calls that reached them.

mod common;

use beacon_core::{
    BaudRate, BuildConfig, CredentialMode, SdkVersion, Transport, SERVER_PORT, SERVER_SSL_PORT,
};
use common::{boot, boot_with_version, Call, CERTIFICATE, PRIVATE_KEY};

fn banner(version: SdkVersion) -> Call {
    Call::Diagnostic(format!("SDK version:{}", version))
}

const UART: Call = Call::Serial {
    rx: BaudRate::B115200,
    tx: BaudRate::B115200,
};

// =============================================================================
// Full sequences
// =============================================================================

mod sequences {
    use super::*;

    #[test]
    fn test_secure_without_platform() {
        let version = SdkVersion::new(0, 9, 3);
        let calls = boot_with_version(BuildConfig::new(false, Transport::Secure), version);

        assert_eq!(
            calls,
            vec![
                banner(version),
                UART,
                Call::Discovery,
                Call::WebServer {
                    port: SERVER_SSL_PORT,
                    mode: CredentialMode::Bundled,
                    certificate: CERTIFICATE.to_vec(),
                    private_key: PRIVATE_KEY.to_vec(),
                },
            ]
        );
    }

    #[test]
    fn test_plain_build() {
        let version = SdkVersion::new(0, 9, 3);
        let calls = boot_with_version(BuildConfig::new(false, Transport::Plain), version);

        assert_eq!(
            calls,
            vec![
                banner(version),
                UART,
                Call::Discovery,
                Call::WebServer {
                    port: SERVER_PORT,
                    mode: CredentialMode::None,
                    certificate: vec![],
                    private_key: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_placeholder_build_with_platform() {
        let version = SdkVersion::new(1, 2, 0);
        let calls = boot_with_version(
            BuildConfig::new(true, Transport::PlaintextWithPlaceholder),
            version,
        );

        assert_eq!(
            calls,
            vec![
                banner(version),
                Call::Platform,
                UART,
                Call::Discovery,
                Call::WebServer {
                    port: SERVER_PORT,
                    mode: CredentialMode::Placeholder,
                    certificate: vec![],
                    private_key: vec![],
                },
            ]
        );
    }
}

// =============================================================================
// Platform client
// =============================================================================

mod platform {
    use super::*;

    #[test]
    fn test_platform_runs_before_local_services() {
        let calls = boot(BuildConfig::new(true, Transport::Secure));

        let platform = calls.iter().position(|c| *c == Call::Platform).unwrap();
        let uart = calls.iter().position(|c| *c == UART).unwrap();
        let web = calls.iter().position(Call::is_web_server).unwrap();

        assert_eq!(platform, 1, "platform starts right after the banner");
        assert!(platform < uart);
        assert!(platform < web);
    }

    #[test]
    fn test_platform_never_called_when_compiled_out() {
        for transport in [
            Transport::Secure,
            Transport::PlaintextWithPlaceholder,
            Transport::Plain,
        ] {
            let calls = boot(BuildConfig::new(false, transport));
            assert!(!calls.contains(&Call::Platform), "{:?}", transport);
        }
    }
}

// =============================================================================
// Banner
// =============================================================================

mod version_banner {
    use super::*;

    #[test]
    fn test_banner_is_first_and_only_diagnostic() {
        let calls = boot(BuildConfig::new(true, Transport::Plain));

        let diagnostics: Vec<_> = calls
            .iter()
            .filter(|c| matches!(c, Call::Diagnostic(_)))
            .collect();
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(calls[0], Call::Diagnostic(_)));
    }

    #[test]
    fn test_banner_has_three_numeric_components() {
        let calls = boot(BuildConfig::new(false, Transport::Plain));

        let Call::Diagnostic(line) = &calls[0] else {
            panic!("expected banner first, got {:?}", calls[0]);
        };
        let version = line
            .strip_prefix("SDK version:")
            .expect("banner prefix");
        let parts: Vec<u16> = version
            .split('.')
            .map(|p| p.parse().expect("numeric component"))
            .collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(version.parse::<SdkVersion>().unwrap(), SdkVersion::CURRENT);
    }
}

// =============================================================================
// Build matrix from Cargo features
// =============================================================================

mod features {
    use super::*;

    #[test]
    fn test_current_build_boots_with_one_web_server() {
        let config = BuildConfig::current();
        let calls = boot(config);

        let web: Vec<_> = calls.iter().filter(|c| c.is_web_server()).collect();
        assert_eq!(web.len(), 1);
        match web[0] {
            Call::WebServer { port, .. } => assert_eq!(*port, config.web_server_port()),
            other => panic!("unexpected call {:?}", other),
        }
    }
}
