//! Content loading and caching.
//!
//! The content mapping is a single JSON document of nested objects whose
//! leaves are plain strings or per-language objects. It is loaded the first
//! time a lookup needs it and kept for the lifetime of the cache.

use crate::error::{json_kind, ContentError};
use crate::i18n::LookupMetrics;
use serde_json::{Map, Value};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

/// The nested translation data.
pub type ContentMap = Map<String, Value>;

/// Somewhere the content mapping can be loaded from.
pub trait ContentSource: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<ContentMap, ContentError>> + Send;
}

/// Reads the content document from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for JsonFileSource {
    async fn load(&self) -> Result<ContentMap, ContentError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!("Read {} bytes of content from {}", raw.len(), self.path.display());
        parse_content(&raw)
    }
}

/// Content that is already in memory, e.g. a document embedded at build time.
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: Value,
}

impl StaticSource {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Parse an embedded JSON string, e.g. from `include_str!`.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

impl ContentSource for StaticSource {
    async fn load(&self) -> Result<ContentMap, ContentError> {
        into_content_map(self.document.clone())
    }
}

/// Parse a JSON document into a content mapping.
pub fn parse_content(raw: &str) -> Result<ContentMap, ContentError> {
    into_content_map(serde_json::from_str(raw)?)
}

fn into_content_map(document: Value) -> Result<ContentMap, ContentError> {
    match document {
        Value::Object(map) => Ok(map),
        other => Err(ContentError::NotAnObject(json_kind(&other))),
    }
}

/// Get-or-load cache for the content mapping.
///
/// A successful load is kept until [`ContentCache::invalidate`]. A failed load
/// is logged and yields an empty mapping for that call only; the cache stays
/// empty so the next call tries again.
pub struct ContentCache<S> {
    source: S,
    cell: OnceCell<Arc<ContentMap>>,
    metrics: Arc<LookupMetrics>,
}

impl<S: ContentSource> ContentCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_metrics(source, Arc::new(LookupMetrics::new()))
    }

    pub fn with_metrics(source: S, metrics: Arc<LookupMetrics>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
            metrics,
        }
    }

    /// Return the cached mapping, loading it first if needed.
    ///
    /// Concurrent first callers wait on the same load.
    pub async fn get_or_load(&self) -> Arc<ContentMap> {
        if let Some(content) = self.cell.get() {
            self.metrics.record_cache_hit();
            return Arc::clone(content);
        }

        let loaded = self
            .cell
            .get_or_try_init(|| async {
                self.metrics.record_load();
                let content = self.source.load().await?;
                info!("Loaded content mapping with {} top-level keys", content.len());
                Ok::<_, ContentError>(Arc::new(content))
            })
            .await;

        match loaded {
            Ok(content) => Arc::clone(content),
            Err(e) => {
                self.metrics.record_load_failure();
                error!("Failed to load content: {}", e);
                Arc::new(ContentMap::new())
            }
        }
    }

    /// Whether a mapping is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Drop the cached mapping so the next access reloads it.
    pub fn invalidate(&mut self) {
        if self.cell.take().is_some() {
            debug!("Content cache invalidated");
        }
    }

    pub fn metrics(&self) -> &Arc<LookupMetrics> {
        &self.metrics
    }
}
