//! Execution environment abstraction.
//!
//! Everything the resolvers need from a browser (location, durable storage,
//! the navigator language, the color-scheme preference, the document root and
//! the global event target) goes through the [`Host`] trait. An
//! [`Environment`] is either interactive, wrapping a host, or non-interactive
//! (static pre-rendering), in which case the resolvers fall back to defaults
//! and perform no side effects.

mod simulated;
mod storage;

pub use simulated::SimulatedHost;
pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::error::StorageError;
use crate::theme::Theme;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Storage key for the preferred language.
pub const LANGUAGE_STORAGE_KEY: &str = "preferred-language";

/// Storage key for the preferred theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document root attribute carrying the page language.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Document root attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Notification broadcast on the global event target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "kebab-case")]
pub enum HostEvent {
    ThemeChanged { theme: Theme },
}

impl HostEvent {
    /// DOM event name of this notification.
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::ThemeChanged { .. } => "theme-changed",
        }
    }
}

/// The browser-facing capabilities used by the resolvers.
pub trait Host: Send + Sync {
    /// Path component of the current location (e.g. `/es/about`).
    fn pathname(&self) -> String;

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// The runtime's reported language tag (e.g. `es-MX`), if any.
    fn navigator_language(&self) -> Option<String>;

    /// Whether the OS signals a dark color-scheme preference.
    fn prefers_dark_scheme(&self) -> bool;

    fn set_root_attribute(&self, name: &str, value: &str);

    fn navigate(&self, path: &str);

    fn dispatch_event(&self, event: HostEvent);

    /// Register a listener on the global event target.
    fn subscribe(&self) -> broadcast::Receiver<HostEvent>;
}

/// Where the resolvers are running.
#[derive(Clone)]
pub enum Environment {
    Interactive(Arc<dyn Host>),
    NonInteractive,
}

impl Environment {
    pub fn interactive(host: impl Host + 'static) -> Self {
        Environment::Interactive(Arc::new(host))
    }

    pub fn host(&self) -> Option<&dyn Host> {
        match self {
            Environment::Interactive(host) => Some(host.as_ref()),
            Environment::NonInteractive => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Environment::Interactive(_))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Interactive(_) => f.write_str("Environment::Interactive"),
            Environment::NonInteractive => f.write_str("Environment::NonInteractive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_host() {
        let env = Environment::interactive(SimulatedHost::new());
        assert!(env.is_interactive());
        assert!(env.host().is_some());

        let env = Environment::NonInteractive;
        assert!(!env.is_interactive());
        assert!(env.host().is_none());
    }

    #[test]
    fn test_environment_debug() {
        assert_eq!(
            format!("{:?}", Environment::NonInteractive),
            "Environment::NonInteractive"
        );
    }

    #[test]
    fn test_theme_changed_event_shape() {
        let event = HostEvent::ThemeChanged { theme: Theme::Dark };
        assert_eq!(event.name(), "theme-changed");

        let json = serde_json::to_value(&event).expect("Should serialize");
        assert_eq!(json["type"], "theme-changed");
        assert_eq!(json["detail"]["theme"], "dark");
    }
}
