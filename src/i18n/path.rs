//! URL path conventions for localized pages.
//!
//! The first path segment selects the language. The default language is
//! served from the root without a prefix; every other language lives under
//! `/<code>`.

use crate::i18n::{is_language_supported, Language};

/// Extract a supported language from the first segment of a URL path.
pub fn language_from_path(pathname: &str) -> Option<Language> {
    let first = pathname.split('/').find(|segment| !segment.is_empty())?;
    Language::from_code(first).ok()
}

/// Build the path of `path` as seen in language `lang`.
///
/// Any existing language prefix is replaced, so the function can be applied
/// to the current page path to get its counterpart in another language.
pub fn build_localized_path(lang: Language, path: &str, default_language: Language) -> String {
    let rest = strip_language_prefix(path.strip_prefix('/').unwrap_or(path));

    if lang == default_language {
        let localized = format!("/{}", rest);
        let trimmed = localized.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        format!("/{}/{}", lang.code(), rest)
            .trim_end_matches('/')
            .to_string()
    }
}

/// Drop a leading `xx/` or bare `xx` segment when `xx` is a supported code.
fn strip_language_prefix(path: &str) -> &str {
    let (first, rest) = match path.split_once('/') {
        Some((first, rest)) => (first, rest),
        None => (path, ""),
    };

    if is_language_supported(first) {
        rest
    } else {
        path
    }
}
