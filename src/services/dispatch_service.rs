//! Message dispatch service.
//!
//! Orchestrates the pure dispatcher pieces: validation, native-vs-web
//! routing through the package probe, and the platform hand-off.

use crate::config::Config;
use crate::dispatch::{self, DispatchTarget, PackageProbe, UriLauncher, WhatsAppUri};
use crate::domain::ValidationError;
use crate::error::{DispatchError, DispatchResult};
use std::sync::Arc;

/// Service that turns a recipient and message into a launched WhatsApp URI.
pub struct DispatchService {
    probe: Arc<dyn PackageProbe>,
    launcher: Arc<dyn UriLauncher>,
    min_number_digits: usize,
    default_country_code: String,
    web_fallback: bool,
}

impl DispatchService {
    pub fn new(
        probe: Arc<dyn PackageProbe>,
        launcher: Arc<dyn UriLauncher>,
        config: &Config,
    ) -> Self {
        Self {
            probe,
            launcher,
            min_number_digits: config.min_number_digits,
            default_country_code: config.default_country_code.clone(),
            web_fallback: config.web_fallback,
        }
    }

    /// Validate the recipient and message into a [`DispatchTarget`].
    ///
    /// When the caller supplies no country code the configured default is
    /// applied, matching the pre-filled country field of the original
    /// composer this tool replaces.
    pub fn prepare(
        &self,
        country_code: Option<&str>,
        national_number: &str,
        message: &str,
    ) -> Result<DispatchTarget, ValidationError> {
        let code = match country_code {
            Some(code) if !code.trim().is_empty() => code,
            _ => &self.default_country_code,
        };
        dispatch::prepare_target(code, national_number, message, self.min_number_digits)
    }

    /// Route a validated target to the native deep link or the web fallback.
    ///
    /// The native package list is probed in order (consumer variant first);
    /// without an installed package the wa.me URL is used, unless the web
    /// fallback has been disabled by configuration.
    pub fn route(&self, target: &DispatchTarget) -> DispatchResult<WhatsAppUri> {
        if let Some(package) = self.probe.installed_whatsapp() {
            tracing::debug!("Routing to native package {}", package);
            return Ok(WhatsAppUri::native(target, package));
        }

        if self.web_fallback {
            tracing::debug!("No native package installed, using wa.me fallback");
            return Ok(WhatsAppUri::web(target));
        }

        Err(DispatchError::LaunchFailed(
            "WhatsApp is not installed and the web fallback is disabled".to_string(),
        ))
    }

    /// Validate, route, and launch in one step.
    ///
    /// Returns the URI that was handed off. A successful return means the
    /// platform accepted the hand-off; delivery is assumed, not confirmed.
    pub fn send(
        &self,
        country_code: Option<&str>,
        national_number: &str,
        message: &str,
    ) -> DispatchResult<WhatsAppUri> {
        let target = self.prepare(country_code, national_number, message)?;
        let uri = self.route(&target)?;
        self.launcher.launch(uri.as_str())?;
        tracing::info!("Dispatched message to {}", target.full_number);
        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StaticProbe {
        installed: Vec<&'static str>,
    }

    impl PackageProbe for StaticProbe {
        fn is_installed(&self, package: &str) -> bool {
            self.installed.contains(&package)
        }
    }

    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingLauncher {
        fn new(fail: bool) -> Self {
            Self {
                launched: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl UriLauncher for RecordingLauncher {
        fn launch(&self, uri: &str) -> DispatchResult<()> {
            if self.fail {
                return Err(DispatchError::LaunchFailed("no handler".to_string()));
            }
            self.launched.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    fn service(installed: Vec<&'static str>, fail_launch: bool) -> (DispatchService, Arc<RecordingLauncher>) {
        let launcher = Arc::new(RecordingLauncher::new(fail_launch));
        let service = DispatchService::new(
            Arc::new(StaticProbe { installed }),
            launcher.clone(),
            &Config::default(),
        );
        (service, launcher)
    }

    #[test]
    fn test_send_native_when_installed() {
        let (service, launcher) = service(vec!["com.whatsapp"], false);

        let uri = service.send(Some("91"), "9876543210", "hi").unwrap();
        assert!(uri.is_native());
        assert_eq!(
            launcher.launched.lock().unwrap()[0],
            "whatsapp://send?phone=919876543210&text=hi"
        );
    }

    #[test]
    fn test_send_web_fallback_when_not_installed() {
        let (service, launcher) = service(vec![], false);

        let uri = service.send(Some("91"), "9876543210", "hi").unwrap();
        assert!(!uri.is_native());
        assert_eq!(
            launcher.launched.lock().unwrap()[0],
            "https://wa.me/919876543210?text=hi"
        );
    }

    #[test]
    fn test_default_country_code_applied() {
        let (service, _) = service(vec![], false);

        // Config::default() carries "91".
        let target = service.prepare(None, "9876543210", "hi").unwrap();
        assert_eq!(target.full_number, "919876543210");

        let target = service.prepare(Some("  "), "9876543210", "hi").unwrap();
        assert_eq!(target.full_number, "919876543210");
    }

    #[test]
    fn test_explicit_plus_still_overrides_default() {
        let (service, _) = service(vec![], false);

        let target = service.prepare(None, "+447911123456", "hi").unwrap();
        assert_eq!(target.full_number, "447911123456");
    }

    #[test]
    fn test_validation_failure_does_not_launch() {
        let (service, launcher) = service(vec!["com.whatsapp"], false);

        let err = service.send(Some("91"), "", "hi").unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Validation(ValidationError::EmptyPhoneNumber)
        ));
        assert!(launcher.launched.lock().unwrap().is_empty());
    }

    #[test]
    fn test_launch_failure_reported() {
        let (service, _) = service(vec![], true);

        let err = service.send(Some("91"), "9876543210", "hi").unwrap_err();
        assert!(matches!(err, DispatchError::LaunchFailed(_)));
    }

    #[test]
    fn test_fallback_disabled_fails_without_package() {
        let launcher = Arc::new(RecordingLauncher::new(false));
        let config = Config {
            web_fallback: false,
            ..Config::default()
        };
        let service = DispatchService::new(
            Arc::new(StaticProbe { installed: vec![] }),
            launcher,
            &config,
        );

        let err = service.send(Some("91"), "9876543210", "hi").unwrap_err();
        assert!(matches!(err, DispatchError::LaunchFailed(_)));
    }

    #[test]
    fn test_business_variant_routes_native() {
        let (service, _) = service(vec!["com.whatsapp.w4b"], false);

        let uri = service.send(Some("91"), "9876543210", "hi").unwrap();
        match uri {
            WhatsAppUri::Native { package, .. } => assert_eq!(package, "com.whatsapp.w4b"),
            WhatsAppUri::Web { .. } => panic!("expected native routing"),
        }
    }
}
