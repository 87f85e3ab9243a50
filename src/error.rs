//! Error types
//!
//! Nothing here ever escapes `sim::tick`; these surface only from loading
//! the archetype table and config files.

use thiserror::Error;

/// A single archetype row that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected 6 fields, found {0}")]
    TooFewFields(usize),
    #[error("field `{field}` is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
}

/// Archetype catalog failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("archetype catalog is empty")]
    Empty,
    #[error("no archetype with id {0}")]
    UnknownArchetype(u32),
    #[error("failed to read archetype table: {0}")]
    Io(#[from] std::io::Error),
}

/// Tuning/settings file failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}
