//! Content completeness validation.
//!
//! Walks a content mapping and reports per-language leaves that are missing a
//! supported language, carry unknown language codes, or hold non-text values.

use crate::i18n::{ContentMap, LanguageRegistry};
use serde::Serialize;
use serde_json::Value;

/// Validation report containing errors and warnings about a content mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Structural problems that make a translation unusable
    pub errors: Vec<String>,

    /// Missing or suspicious translations
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation coverage.
pub struct ContentValidator;

impl ContentValidator {
    /// Validate every per-language leaf in `content`.
    ///
    /// An object counts as a per-language leaf when at least one of its keys
    /// is a registered language code.
    pub fn validate(content: &ContentMap) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (key, value) in content {
            Self::visit(value, key, &mut report);
        }
        report
    }

    fn visit(value: &Value, path: &str, report: &mut ValidationReport) {
        match value {
            Value::Object(map) if Self::is_per_language(map) => {
                Self::check_leaf(map, path, report);
            }
            Value::Object(map) => {
                for (key, child) in map {
                    Self::visit(child, &format!("{}.{}", path, key), report);
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    Self::visit(item, &format!("{}[{}]", path, index), report);
                }
            }
            _ => {}
        }
    }

    fn is_per_language(map: &serde_json::Map<String, Value>) -> bool {
        let registry = LanguageRegistry::get();
        map.keys().any(|key| registry.get_by_code(key).is_some())
    }

    fn check_leaf(map: &serde_json::Map<String, Value>, path: &str, report: &mut ValidationReport) {
        let registry = LanguageRegistry::get();

        for (code, value) in map {
            if registry.get_by_code(code).is_none() {
                report
                    .warnings
                    .push(format!("Unknown language '{}' at '{}'", code, path));
            } else if !value.is_string() {
                report.errors.push(format!(
                    "Translation '{}' at '{}' is not a string",
                    code, path
                ));
            }
        }

        for language in registry.list_enabled() {
            let present = map
                .get(language.code)
                .and_then(Value::as_str)
                .map(|text| !text.trim().is_empty())
                .unwrap_or(false);
            if !present && map.get(language.code).map_or(true, Value::is_string) {
                report.warnings.push(format!(
                    "Missing {} ({}) translation at '{}'",
                    language.name, language.code, path
                ));
            }
        }
    }
}
