//! Error types shared across the library.
//!
//! Lookup misses are never errors: they degrade to the key path itself. The
//! types here cover the few places where a caller can actually get a failure
//! back (parsing a language, theme or proficiency, loading content, writing
//! storage).

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a code into a supported [`crate::i18n::Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),

    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// Failure to load the content mapping.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Failure to write a preference to durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access preferences file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A theme string that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid theme: '{0}' (expected 'light' or 'dark')")]
pub struct ThemeParseError(pub String);

/// A technology proficiency outside the 1 to 5 scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Proficiency must be between 1 and 5, got {0}")]
pub struct ProficiencyError(pub u8);

/// Short name of a JSON value's kind, used in diagnostics.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
