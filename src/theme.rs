//! Light/dark theme resolution.
//!
//! The active theme is the stored preference when there is one, otherwise the
//! OS color-scheme preference. "Follow the system" is never stored; it is only
//! what happens when nothing has been stored yet.

use crate::env::{Environment, HostEvent, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::error::ThemeParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Decides, applies and toggles the visual theme.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    env: Environment,
}

impl ThemeResolver {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// The theme that should be shown right now.
    ///
    /// Always `Light` when non-interactive.
    pub fn resolve_active_theme(&self) -> Theme {
        let Some(host) = self.env.host() else {
            return Theme::Light;
        };

        if let Some(stored) = host.storage_get(THEME_STORAGE_KEY) {
            match stored.parse() {
                Ok(theme) => return theme,
                Err(e) => debug!("Ignoring stored theme: {}", e),
            }
        }

        if host.prefers_dark_scheme() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Show `theme`, persist it and notify listeners.
    pub fn apply_theme(&self, theme: Theme) {
        let Some(host) = self.env.host() else {
            return;
        };

        host.set_root_attribute(THEME_ATTRIBUTE, theme.as_str());

        if let Err(e) = host.storage_set(THEME_STORAGE_KEY, theme.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }

        host.dispatch_event(HostEvent::ThemeChanged { theme });
        info!("Theme set to {}", theme);
    }

    /// Flip the active theme and return the new one.
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.resolve_active_theme().toggled();
        self.apply_theme(theme);
        theme
    }

    /// Listen for theme changes. `None` when non-interactive.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<HostEvent>> {
        self.env.host().map(|host| host.subscribe())
    }
}
