//! Integration tests for portfolio-locale
//!
//! These tests compose the resolvers the way a page does: a shared host,
//! file-backed preferences and content loaded from disk.

use portfolio_locale::config::Config;
use portfolio_locale::env::{
    Environment, FileStorage, Host, HostEvent, SimulatedHost, Storage, LANGUAGE_STORAGE_KEY,
    THEME_STORAGE_KEY,
};
use portfolio_locale::i18n::{ContentValidator, JsonFileSource, Language};
use portfolio_locale::portfolio::TechCategory;
use portfolio_locale::site::{environment_from_config, Site};
use portfolio_locale::theme::Theme;
use std::sync::Arc;
use tempfile::TempDir;

// ==================== Test Helpers ====================

const CONTENT: &str = r#"{
    "hero": {
        "title": {"en": "Hi", "es": "Hola"},
        "name": "Ada"
    },
    "nav": {
        "home": {"en": "Home", "es": "Inicio"},
        "blog": {"en": "Blog"}
    }
}"#;

fn create_test_config(temp_dir: &TempDir) -> Config {
    let content_path = temp_dir.path().join("content.json");
    std::fs::write(&content_path, CONTENT).expect("Failed to write content");

    Config {
        content_path: content_path.to_str().unwrap().to_string(),
        default_language: Language::ENGLISH,
        preferences_path: temp_dir
            .path()
            .join("prefs.json")
            .to_str()
            .unwrap()
            .to_string(),
        site_path: "/".to_string(),
        browser_language: None,
        prefers_dark: false,
        non_interactive: false,
    }
}

fn site_with_host(
    config: &Config,
    host: SimulatedHost,
) -> (Site<JsonFileSource>, Arc<SimulatedHost>) {
    let host = Arc::new(host);
    let env = Environment::Interactive(Arc::clone(&host) as Arc<dyn Host>);
    let site = Site::new(env, config, JsonFileSource::new(&config.content_path));
    (site, host)
}

// ==================== Language Flow Tests ====================

#[tokio::test]
async fn test_page_load_in_spanish_from_url() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    let (site, host) = site_with_host(&config, SimulatedHost::new().with_location("/es/about"));

    let lang = site.language.initialize();
    assert_eq!(lang, Language::SPANISH);
    assert_eq!(host.root_attribute("lang"), Some("es".to_string()));

    assert_eq!(site.translator.text("hero.title", lang).await, "Hola");
    assert_eq!(site.translator.text("hero.name", lang).await, "Ada");
    assert_eq!(site.translator.text("nope.missing", lang).await, "nope.missing");
}

#[tokio::test]
async fn test_switch_language_then_reload_remembers_preference() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir);
    config.site_path = "/projects".to_string();

    let site = Site::from_config(&config);
    assert_eq!(site.language.resolve_active_language(), Language::ENGLISH);
    assert_eq!(
        site.language.switch_language(Language::SPANISH).as_deref(),
        Some("/es/projects")
    );

    // A fresh process at the root path picks the stored preference up
    config.site_path = "/".to_string();
    let reloaded = Site::from_config(&config);
    assert_eq!(reloaded.language.resolve_active_language(), Language::SPANISH);

    let stored = FileStorage::new(&config.preferences_path).get(LANGUAGE_STORAGE_KEY);
    assert_eq!(stored, Some("es".to_string()));
}

#[tokio::test]
async fn test_text_group_for_navigation() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    let site = Site::from_config(&config);

    let nav = site.translator.resolve_text_group("nav", "es").await;
    assert_eq!(nav.len(), 1);
    assert_eq!(nav["home"], "Inicio");
}

#[tokio::test]
async fn test_missing_content_file_degrades_then_recovers() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    std::fs::remove_file(&config.content_path).unwrap();

    let site = Site::from_config(&config);
    assert_eq!(site.translator.text("hero.title", Language::SPANISH).await, "hero.title");
    assert!(!site.translator.cache().is_loaded());

    std::fs::write(&config.content_path, CONTENT).unwrap();
    assert_eq!(site.translator.text("hero.title", Language::SPANISH).await, "Hola");
    assert!(site.translator.cache().is_loaded());

    let report = site.translator.cache().metrics().report();
    assert_eq!(report.loads, 2);
    assert_eq!(report.load_failures, 1);
}

#[tokio::test]
async fn test_content_validation_reports_gaps() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    let site = Site::from_config(&config);

    let content = site.translator.cache().get_or_load().await;
    let report = ContentValidator::validate(&content);

    assert!(!report.has_errors());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("nav.blog"));
}

// ==================== Portfolio Data Tests ====================

fn bundled_content_config(temp_dir: &TempDir) -> Config {
    let mut config = create_test_config(temp_dir);
    config.content_path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/content.json").to_string();
    config
}

#[tokio::test]
async fn test_bundled_content_is_fully_translated() {
    let temp_dir = TempDir::new().unwrap();
    let site = Site::from_config(&bundled_content_config(&temp_dir));

    let content = site.translator.cache().get_or_load().await;
    assert!(site.translator.cache().is_loaded());

    let report = ContentValidator::validate(&content);
    assert!(report.is_clean(), "Unexpected report: {:?}", report);
}

#[tokio::test]
async fn test_bundled_portfolio_in_spanish() {
    let temp_dir = TempDir::new().unwrap();
    let site = Site::from_config(&bundled_content_config(&temp_dir));
    let default_language = site.translator.default_language();

    let portfolio = site.portfolio().await.expect("Bundled portfolio should deserialize");

    let personal = portfolio.personal.as_ref().expect("Should have personal info");
    assert_eq!(personal.name, "Ada Lovelace");
    assert_eq!(
        personal.title(Language::SPANISH, default_language),
        "Desarrolladora full-stack"
    );

    let projects = portfolio.featured_projects();
    assert_eq!(projects.len(), 2);
    assert!(projects[0].featured);
    assert_eq!(
        projects[0].title(Language::SPANISH, default_language),
        "Portafolio personal"
    );

    assert_eq!(
        portfolio.experience[0].period(Language::SPANISH, default_language),
        "Ene 2021 - Actualidad"
    );

    let rust = &portfolio.technologies[0];
    assert_eq!(rust.category, TechCategory::Backend);
    assert_eq!(rust.level.map(|level| level.value()), Some(5));
    assert!(portfolio.technologies.iter().any(|tech| tech.level.is_none()));
}

#[tokio::test]
async fn test_portfolio_uses_configured_default_language() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir);
    config.default_language = Language::SPANISH;
    std::fs::write(
        &config.content_path,
        r#"{"projects": [{
            "id": "notes",
            "title": {"es": "Notas"},
            "description": {"es": "Apuntes"},
            "technologies": [],
            "image": "/notes.png"
        }]}"#,
    )
    .unwrap();

    let site = Site::from_config(&config);
    let portfolio = site.portfolio().await.expect("Should deserialize");
    let default_language = site.translator.default_language();

    assert_eq!(default_language, Language::SPANISH);
    assert_eq!(portfolio.projects[0].title(Language::ENGLISH, default_language), "Notas");
    assert!(portfolio.personal.is_none());
}

#[tokio::test]
async fn test_portfolio_rejects_out_of_range_level() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    std::fs::write(
        &config.content_path,
        r#"{"technologies": [{"name": "Rust", "icon": "rust.svg", "category": "backend", "level": 9}]}"#,
    )
    .unwrap();

    let site = Site::from_config(&config);
    let err = site.portfolio().await.unwrap_err();
    assert!(err.to_string().contains("between 1 and 5"));
}

// ==================== Theme Flow Tests ====================

#[tokio::test]
async fn test_toggle_theme_persists_and_broadcasts() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    let (site, host) = site_with_host(&config, SimulatedHost::new().with_dark_preference(true));
    let mut rx = site.theme.subscribe().expect("Interactive site");

    assert_eq!(site.theme.resolve_active_theme(), Theme::Dark);

    let toggled = site.theme.toggle_theme();
    assert_eq!(toggled, Theme::Light);
    assert_eq!(host.storage_get(THEME_STORAGE_KEY), Some("light".to_string()));
    assert_eq!(host.root_attribute("data-theme"), Some("light".to_string()));
    assert_eq!(
        rx.recv().await.unwrap(),
        HostEvent::ThemeChanged { theme: Theme::Light }
    );

    assert_eq!(site.theme.toggle_theme(), Theme::Dark);
    assert_eq!(host.storage_get(THEME_STORAGE_KEY), Some("dark".to_string()));
}

#[test]
fn test_theme_survives_process_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);

    let first = Site::from_config(&config);
    assert_eq!(first.theme.toggle_theme(), Theme::Dark);

    let second = Site::from_config(&config);
    assert_eq!(second.theme.resolve_active_theme(), Theme::Dark);
}

// ==================== Non-interactive Tests ====================

#[tokio::test]
async fn test_non_interactive_prerender() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir);
    config.non_interactive = true;
    config.default_language = Language::SPANISH;

    assert!(!environment_from_config(&config).is_interactive());

    let site = Site::from_config(&config);
    assert_eq!(site.language.resolve_active_language(), Language::SPANISH);
    assert_eq!(site.theme.resolve_active_theme(), Theme::Light);
    assert_eq!(site.language.switch_language(Language::ENGLISH), None);

    // Translation still works while pre-rendering
    assert_eq!(site.translator.text("hero.title", Language::SPANISH).await, "Hola");

    // Nothing was persisted
    assert!(!std::path::Path::new(&config.preferences_path).exists());
}
