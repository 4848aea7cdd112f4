//! WhatsApp URI construction.
//!
//! Two targets exist for the same payload: the `whatsapp://send` deep link
//! handled by an installed native package, and the `https://wa.me/` web URL
//! resolved by whatever browser the platform offers.

use super::DispatchTarget;
use std::fmt;

/// A constructed WhatsApp hand-off URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsAppUri {
    /// `whatsapp://send?...` deep link bound to an installed package
    Native {
        uri: String,
        /// Package identifier the deep link is addressed to
        package: String,
    },

    /// `https://wa.me/...` web fallback
    Web { uri: String },
}

impl WhatsAppUri {
    /// Build the native deep link for `target`, addressed to `package`.
    pub fn native(target: &DispatchTarget, package: &str) -> Self {
        let uri = format!(
            "whatsapp://send?phone={}&text={}",
            target.full_number,
            urlencoding::encode(&target.message)
        );
        Self::Native {
            uri,
            package: package.to_string(),
        }
    }

    /// Build the wa.me web URL for `target`.
    pub fn web(target: &DispatchTarget) -> Self {
        let uri = format!(
            "https://wa.me/{}?text={}",
            target.full_number,
            urlencoding::encode(&target.message)
        );
        Self::Web { uri }
    }

    /// The URI string to hand to the platform.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Native { uri, .. } => uri,
            Self::Web { uri } => uri,
        }
    }

    /// Whether this is the native deep-link variant.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native { .. })
    }
}

impl fmt::Display for WhatsAppUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
