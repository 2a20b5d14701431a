//! Key-path translation lookups against the content mapping.
//!
//! Lookups never fail: a missing key resolves to the key path itself so that
//! untranslated text is easy to spot in the rendered page.

use crate::i18n::{ContentCache, ContentSource, Language, LookupMetrics};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::warn;

/// Resolves dotted key paths (e.g. `hero.title`) to localized text.
pub struct Translator<S> {
    cache: ContentCache<S>,
    default_language: Language,
}

impl<S: ContentSource> Translator<S> {
    pub fn new(cache: ContentCache<S>, default_language: Language) -> Self {
        Self {
            cache,
            default_language,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn cache(&self) -> &ContentCache<S> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ContentCache<S> {
        &mut self.cache
    }

    fn metrics(&self) -> &Arc<LookupMetrics> {
        self.cache.metrics()
    }

    /// Translate `key_path` into `lang` with the default language as fallback.
    pub async fn text(&self, key_path: &str, lang: Language) -> String {
        self.resolve_text(key_path, lang.code(), self.default_language)
            .await
    }

    /// Resolve `key_path` to text in `lang`.
    ///
    /// `lang` is a raw code so that unsupported codes still walk the fallback
    /// chain: `lang`, then `fallback`, then the default language, then the key
    /// path itself. A plain-string leaf is returned whatever the language.
    pub async fn resolve_text(&self, key_path: &str, lang: &str, fallback: Language) -> String {
        let content = self.cache.get_or_load().await;
        self.metrics().record_lookup();

        let Some(leaf) = walk(&content, key_path) else {
            self.metrics().record_lookup_miss();
            warn!("Translation key not found: {}", key_path);
            return key_path.to_string();
        };

        match leaf {
            Value::String(text) => text.clone(),
            Value::Object(per_language) => {
                let candidates = [lang, fallback.code(), self.default_language.code()];
                let found = candidates
                    .iter()
                    .find_map(|code| non_empty_str(per_language.get(*code)));

                match found {
                    Some(text) => text.to_string(),
                    None => {
                        self.metrics().record_lookup_miss();
                        warn!("No translation for '{}' in '{}' or its fallbacks", key_path, lang);
                        key_path.to_string()
                    }
                }
            }
            _ => {
                self.metrics().record_lookup_miss();
                warn!("Invalid translation structure for key: {}", key_path);
                key_path.to_string()
            }
        }
    }

    /// Resolve every sibling under `key_path` to its text in `lang`.
    ///
    /// Siblings whose per-language mapping lacks `lang` are omitted. A missing
    /// path or a leaf that is not an object yields an empty map.
    pub async fn resolve_text_group(&self, key_path: &str, lang: &str) -> BTreeMap<String, String> {
        let content = self.cache.get_or_load().await;
        self.metrics().record_lookup();

        let group = match walk(&content, key_path) {
            Some(Value::Object(group)) => group,
            Some(_) => {
                self.metrics().record_lookup_miss();
                warn!("Translation group is not an object: {}", key_path);
                return BTreeMap::new();
            }
            None => {
                self.metrics().record_lookup_miss();
                warn!("Translation object not found: {}", key_path);
                return BTreeMap::new();
            }
        };

        group
            .iter()
            .filter_map(|(key, value)| {
                let per_language = value.as_object()?;
                if !per_language.contains_key(lang) {
                    return None;
                }
                let text = non_empty_str(per_language.get(lang))
                    .or_else(|| non_empty_str(per_language.get(self.default_language.code())))
                    .unwrap_or(key.as_str());
                Some((key.clone(), text.to_string()))
            })
            .collect()
    }
}

/// Follow a dotted key path through nested objects.
fn walk<'a>(content: &'a serde_json::Map<String, Value>, key_path: &str) -> Option<&'a Value> {
    let mut segments = key_path.split('.');
    let mut current = content.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

/// Pick the entry for `lang` from a per-language map, falling back to
/// `fallback` and then `default_language`.
pub fn localized<'a, T>(
    content: &'a HashMap<String, T>,
    lang: Language,
    fallback: Language,
    default_language: Language,
) -> Option<&'a T> {
    content
        .get(lang.code())
        .or_else(|| content.get(fallback.code()))
        .or_else(|| content.get(default_language.code()))
}
