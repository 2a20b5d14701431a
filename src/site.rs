//! Composition root: wires the resolvers and the translator from a [`Config`].

use crate::config::Config;
use crate::env::{Environment, FileStorage, SimulatedHost};
use crate::i18n::{ContentCache, ContentSource, JsonFileSource, LanguageResolver, Translator};
use crate::portfolio::PortfolioData;
use crate::theme::ThemeResolver;
use std::sync::Arc;
use tracing::debug;

/// Everything a page needs to localize and theme itself.
pub struct Site<S> {
    pub language: LanguageResolver,
    pub theme: ThemeResolver,
    pub translator: Translator<S>,
}

impl<S: ContentSource> Site<S> {
    pub fn new(env: Environment, config: &Config, source: S) -> Self {
        Self {
            language: LanguageResolver::with_default(env.clone(), config.default_language),
            theme: ThemeResolver::new(env),
            translator: Translator::new(ContentCache::new(source), config.default_language),
        }
    }

    /// Portfolio records from the cached content mapping.
    pub async fn portfolio(&self) -> Result<PortfolioData, serde_json::Error> {
        let content = self.translator.cache().get_or_load().await;
        PortfolioData::from_content(&content)
    }
}

impl Site<JsonFileSource> {
    /// Build a site backed by the content file and preferences file from `config`.
    pub fn from_config(config: &Config) -> Self {
        let env = environment_from_config(config);
        debug!("Composing site in {:?}", env);
        Site::new(env, config, JsonFileSource::new(&config.content_path))
    }
}

/// The environment described by `config`.
pub fn environment_from_config(config: &Config) -> Environment {
    if config.non_interactive {
        return Environment::NonInteractive;
    }

    let mut host = SimulatedHost::new()
        .with_location(config.site_path.clone())
        .with_dark_preference(config.prefers_dark)
        .with_storage(Arc::new(FileStorage::new(&config.preferences_path)));
    if let Some(tag) = &config.browser_language {
        host = host.with_navigator_language(tag.clone());
    }
    Environment::interactive(host)
}
