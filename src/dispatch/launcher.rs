//! Package probing and platform URI hand-off.
//!
//! The dispatcher itself never asks the platform anything; it takes the
//! answers through these two seams. `PackageProbe` answers "is package P
//! installed", `UriLauncher` opens a URI in whatever handler the platform
//! resolves.

use crate::error::{DispatchError, DispatchResult};
use std::path::PathBuf;

/// Known WhatsApp package identifiers, probed in order. Consumer variant
/// first, first match wins.
pub const WHATSAPP_PACKAGES: &[&str] = &["com.whatsapp", "com.whatsapp.w4b"];

/// Capability query: is an application package installed?
pub trait PackageProbe: Send + Sync {
    fn is_installed(&self, package: &str) -> bool;

    /// First installed package out of [`WHATSAPP_PACKAGES`], if any.
    fn installed_whatsapp(&self) -> Option<&'static str> {
        WHATSAPP_PACKAGES
            .iter()
            .copied()
            .find(|pkg| self.is_installed(pkg))
    }
}

/// Capability to open a URI in the platform-resolved handler.
pub trait UriLauncher: Send + Sync {
    /// Open `uri`. A successful return only means the hand-off was accepted;
    /// there is no delivery confirmation.
    fn launch(&self, uri: &str) -> DispatchResult<()>;
}

/// Probe that looks for `<package>.desktop` entries in the XDG data
/// directories, the way flatpak-style desktop installs register them.
pub struct DesktopEntryProbe {
    search_dirs: Vec<PathBuf>,
}

impl DesktopEntryProbe {
    /// Probe over `$XDG_DATA_HOME` and `$XDG_DATA_DIRS` (with the usual
    /// fallbacks when unset).
    pub fn new() -> Self {
        let mut search_dirs = Vec::new();

        if let Ok(home) = std::env::var("XDG_DATA_HOME") {
            search_dirs.push(PathBuf::from(home).join("applications"));
        } else if let Ok(home) = std::env::var("HOME") {
            search_dirs.push(PathBuf::from(home).join(".local/share/applications"));
        }

        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
        for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
            search_dirs.push(PathBuf::from(dir).join("applications"));
        }

        Self { search_dirs }
    }

    /// Probe over an explicit list of `applications` directories.
    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }
}

impl Default for DesktopEntryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageProbe for DesktopEntryProbe {
    fn is_installed(&self, package: &str) -> bool {
        let entry = format!("{}.desktop", package);
        self.search_dirs.iter().any(|dir| dir.join(&entry).is_file())
    }
}

/// Launcher backed by the `open` crate: hands the URI to the platform's
/// default handler (registered scheme handler or browser).
pub struct SystemLauncher;

impl UriLauncher for SystemLauncher {
    fn launch(&self, uri: &str) -> DispatchResult<()> {
        tracing::debug!("Launching URI: {}", uri);
        open::that(uri).map_err(|e| DispatchError::LaunchFailed(e.to_string()))
    }
}
