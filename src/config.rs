use crate::i18n::{Language, DEFAULT_LANGUAGE};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    pub content_path: String,
    pub default_language: Language,

    // Durable preferences
    pub preferences_path: String,

    // Simulated browser state
    pub site_path: String,
    pub browser_language: Option<String>,
    pub prefers_dark: bool,

    // Static pre-rendering (no location, storage or document)
    pub non_interactive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Content
            content_path: std::env::var("CONTENT_PATH")
                .unwrap_or_else(|_| "data/content.json".to_string()),
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(&code)
                    .with_context(|| format!("DEFAULT_LANGUAGE '{}' is not supported", code))?,
                Err(_) => DEFAULT_LANGUAGE,
            },

            // Durable preferences
            preferences_path: std::env::var("PREFERENCES_PATH")
                .unwrap_or_else(|_| ".portfolio-preferences.json".to_string()),

            // Simulated browser state
            site_path: std::env::var("SITE_PATH").unwrap_or_else(|_| "/".to_string()),
            browser_language: std::env::var("BROWSER_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            prefers_dark: env_flag("PREFERS_DARK"),

            non_interactive: env_flag("NON_INTERACTIVE"),
        })
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
