//! Language type: validated representation of a supported language.

use crate::error::LanguageError;
use crate::i18n::{LanguageConfig, LanguageRegistry, TextDirection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The site's default language.
///
/// Used when nothing else (URL, stored preference, browser) selects one, and
/// served without a URL prefix. Components that need a different default take
/// it as an explicit parameter instead of mutating this.
pub const DEFAULT_LANGUAGE: Language = Language::ENGLISH;

/// A validated language.
///
/// Only supported, enabled languages can be constructed, so every value of
/// this type is a member of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```
    /// use portfolio_locale::i18n::Language;
    /// let spanish = Language::from_code("es").unwrap();
    /// assert_eq!(spanish.code(), "es");
    /// ```
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .lookup(code)
            .map(|config| Language { code: config.code })
    }

    /// Map a locale tag such as `es-MX` or `en_US` to a supported language by
    /// its primary subtag. Returns `None` when the primary subtag is unsupported.
    pub fn from_locale(tag: &str) -> Option<Language> {
        let primary = tag
            .trim()
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_lowercase();
        Language::from_code(&primary).ok()
    }

    /// The default language as declared by the registry.
    pub fn registry_default() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// All enabled languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen for
    /// a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    pub fn dir(&self) -> TextDirection {
        self.config().dir
    }
}

/// Check if a language code is supported.
pub fn is_language_supported(code: &str) -> bool {
    LanguageRegistry::get().is_enabled(code)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = LanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::from_code(&value)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}
