//! Where the SMTP URI comes from

use tracing::debug;

use crate::domain::settings::SettingsStore;

/// The settings key holding the SMTP URI
pub const SMTP_URI_SETTING: &str = "smtp_uri";

/// The SMTP URI and its origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SmtpUriSource {
    /// Fixed at deploy time; the stored setting is ignored
    Constant(String),

    /// Read from the runtime settings store
    Stored(String),

    /// Not configured anywhere
    Unset,
}

impl SmtpUriSource {
    /// The URI, empty when unset
    pub fn uri(&self) -> &str {
        match self {
            Self::Constant(uri) | Self::Stored(uri) => uri,
            Self::Unset => "",
        }
    }

    /// Whether the stored setting is overridden and cannot be edited
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

/// Resolves the SMTP URI.
///
/// A deploy-time constant wins whenever it is defined, even when empty.
pub fn resolve_smtp_uri<S>(constant: Option<&str>, store: &S) -> SmtpUriSource
where
    S: SettingsStore + ?Sized,
{
    if let Some(uri) = constant {
        debug!("using SMTP URI constant");
        return SmtpUriSource::Constant(uri.to_string());
    }

    match store.get(SMTP_URI_SETTING) {
        Some(uri) => SmtpUriSource::Stored(uri),
        None => SmtpUriSource::Unset,
    }
}
