//! Internationalization (i18n) module for the English/Spanish site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their display metadata
//! - `language`: Type-safe, registry-validated `Language`
//! - `path`: URL prefix conventions
//! - `resolver`: Active-language resolution and preference persistence
//! - `content`: Content sources and the get-or-load content cache
//! - `translate`: Key-path lookups with per-language fallback
//! - `validator`: Translation coverage checks
//! - `metrics`: Load and lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_locale::i18n::{ContentCache, JsonFileSource, Language, Translator};
//!
//! let translator = Translator::new(
//!     ContentCache::new(JsonFileSource::new("data/content.json")),
//!     Language::ENGLISH,
//! );
//! let title = translator.text("hero.title", Language::SPANISH).await;
//! ```

mod content;
mod language;
mod metrics;
mod path;
mod registry;
mod resolver;
mod translate;
mod validator;

pub use content::{parse_content, ContentCache, ContentMap, ContentSource, JsonFileSource, StaticSource};
pub use language::{is_language_supported, Language, DEFAULT_LANGUAGE};
pub use metrics::{LookupMetrics, MetricsReport};
pub use path::{build_localized_path, language_from_path};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use resolver::LanguageResolver;
pub use translate::{localized, Translator};
pub use validator::{ContentValidator, ValidationReport};
