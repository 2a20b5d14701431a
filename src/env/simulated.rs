//! In-process host used for headless runs and tests.

use crate::env::{Host, HostEvent, MemoryStorage, Storage};
use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::broadcast;
use tracing::debug;

const EVENT_CAPACITY: usize = 16;

/// A host whose browser state lives in memory.
///
/// Storage is pluggable so the same host can run against [`MemoryStorage`] in
/// tests or [`crate::env::FileStorage`] from the command line. Root attributes
/// and navigations are recorded and can be inspected.
pub struct SimulatedHost {
    location: Mutex<String>,
    navigator_language: Option<String>,
    prefers_dark: bool,
    storage: Arc<dyn Storage>,
    root_attributes: Mutex<HashMap<String, String>>,
    navigations: Mutex<Vec<String>>,
    events: broadcast::Sender<HostEvent>,
}

impl SimulatedHost {
    /// Host at `/` with empty in-memory storage and no language or dark preference.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            location: Mutex::new("/".to_string()),
            navigator_language: None,
            prefers_dark: false,
            storage: Arc::new(MemoryStorage::new()),
            root_attributes: Mutex::new(HashMap::new()),
            navigations: Mutex::new(Vec::new()),
            events,
        }
    }

    pub fn with_location(self, pathname: impl Into<String>) -> Self {
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = pathname.into();
        self
    }

    pub fn with_navigator_language(mut self, tag: impl Into<String>) -> Self {
        self.navigator_language = Some(tag.into());
        self
    }

    pub fn with_dark_preference(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = storage;
        self
    }

    /// Current value of a document root attribute.
    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Every path navigated to, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SimulatedHost {
    fn pathname(&self) -> String {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set(key, value)
    }

    fn navigator_language(&self) -> Option<String> {
        self.navigator_language.clone()
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root_attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    fn navigate(&self, path: &str) {
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = path.to_string();
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }

    fn dispatch_event(&self, event: HostEvent) {
        let name = event.name();
        // An error only means nobody is listening
        match self.events.send(event) {
            Ok(listeners) => debug!("Dispatched {} to {} listener(s)", name, listeners),
            Err(_) => debug!("Dispatched {} with no listeners", name),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_defaults() {
        let host = SimulatedHost::new();
        assert_eq!(host.pathname(), "/");
        assert_eq!(host.navigator_language(), None);
        assert!(!host.prefers_dark_scheme());
        assert!(host.navigations().is_empty());
    }

    #[test]
    fn test_builder() {
        let host = SimulatedHost::new()
            .with_location("/es/about")
            .with_navigator_language("es-AR")
            .with_dark_preference(true);

        assert_eq!(host.pathname(), "/es/about");
        assert_eq!(host.navigator_language(), Some("es-AR".to_string()));
        assert!(host.prefers_dark_scheme());
    }

    #[test]
    fn test_navigate_updates_location() {
        let host = SimulatedHost::new();
        host.navigate("/es");
        host.navigate("/es/projects");

        assert_eq!(host.pathname(), "/es/projects");
        assert_eq!(host.navigations(), vec!["/es", "/es/projects"]);
    }

    #[test]
    fn test_shared_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let first = SimulatedHost::new().with_storage(Arc::clone(&storage));
        let second = SimulatedHost::new().with_storage(storage);

        first.storage_set("theme", "dark").expect("Should store");
        assert_eq!(second.storage_get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_root_attributes() {
        let host = SimulatedHost::new();
        assert_eq!(host.root_attribute("lang"), None);
        host.set_root_attribute("lang", "es");
        assert_eq!(host.root_attribute("lang"), Some("es".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_reaches_subscribers() {
        let host = SimulatedHost::new();
        let mut rx = host.subscribe();

        host.dispatch_event(HostEvent::ThemeChanged { theme: Theme::Dark });

        let event = rx.recv().await.expect("Should receive event");
        assert_eq!(event, HostEvent::ThemeChanged { theme: Theme::Dark });
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let host = SimulatedHost::new();
        host.dispatch_event(HostEvent::ThemeChanged { theme: Theme::Light });
    }
}
