//! Active-language resolution and preference handling.

use crate::env::{Environment, LANGUAGE_STORAGE_KEY, LANG_ATTRIBUTE};
use crate::i18n::{build_localized_path, language_from_path, Language, DEFAULT_LANGUAGE};
use tracing::{debug, info, warn};

/// Decides which language the page should be shown in.
///
/// The default language is fixed at construction; nothing here mutates it.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    env: Environment,
    default_language: Language,
}

impl LanguageResolver {
    pub fn new(env: Environment) -> Self {
        Self::with_default(env, DEFAULT_LANGUAGE)
    }

    pub fn with_default(env: Environment, default_language: Language) -> Self {
        Self {
            env,
            default_language,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Resolve the active language.
    ///
    /// First match wins: URL path prefix, stored preference, browser language
    /// (primary subtag), then the default. Non-interactive contexts always get
    /// the default.
    pub fn resolve_active_language(&self) -> Language {
        let Some(host) = self.env.host() else {
            return self.default_language;
        };

        if let Some(lang) = language_from_path(&host.pathname()) {
            return lang;
        }

        if let Some(stored) = host.storage_get(LANGUAGE_STORAGE_KEY) {
            match Language::from_code(&stored) {
                Ok(lang) => return lang,
                Err(e) => debug!("Ignoring stored language preference: {}", e),
            }
        }

        host.navigator_language()
            .and_then(|tag| Language::from_locale(&tag))
            .unwrap_or(self.default_language)
    }

    /// Persist `lang` as the preferred language and mark the document with it.
    ///
    /// Does not navigate; see [`LanguageResolver::navigate_to_localized`].
    pub fn set_active_preference(&self, lang: Language) {
        let Some(host) = self.env.host() else {
            return;
        };

        if let Err(e) = host.storage_set(LANGUAGE_STORAGE_KEY, lang.code()) {
            warn!("Failed to persist language preference: {}", e);
        }
        host.set_root_attribute(LANG_ATTRIBUTE, lang.code());
        info!("Language changed to: {}", lang);
    }

    /// Navigate to the current page's counterpart in `lang`.
    ///
    /// Returns the target path, or `None` when non-interactive.
    pub fn navigate_to_localized(&self, lang: Language) -> Option<String> {
        let host = self.env.host()?;
        let target = self.localized_path(lang, &host.pathname());
        host.navigate(&target);
        Some(target)
    }

    /// Persist the preference and move to the localized version of the page.
    pub fn switch_language(&self, lang: Language) -> Option<String> {
        self.set_active_preference(lang);
        self.navigate_to_localized(lang)
    }

    /// Resolve the language for a fresh page load, mark the document and store it.
    pub fn initialize(&self) -> Language {
        let lang = self.resolve_active_language();
        if self.env.is_interactive() {
            self.set_active_preference(lang);
        }
        lang
    }

    /// [`build_localized_path`] with this resolver's default language.
    pub fn localized_path(&self, lang: Language, path: &str) -> String {
        build_localized_path(lang, path, self.default_language)
    }
}
