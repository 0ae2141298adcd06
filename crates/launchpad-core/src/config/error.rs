//! Error types for catalog loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two feature groups share a name
    #[error("duplicate feature: {feature}")]
    DuplicateFeature { feature: String },
    /// Declared path params differ from the template's placeholders
    #[error(
        "operation {feature}.{operation}: pathParams {declared:?} do not match placeholders {found:?} in '{template}'"
    )]
    PathParamsMismatch {
        feature: String,
        operation: String,
        template: String,
        declared: Vec<String>,
        found: Vec<String>,
    },
    /// Fixture entry does not bind every placeholder of its set's url
    #[error("fixture '{set}:{entry}' is missing a value for a placeholder in '{url}'")]
    MissingFixtureParam {
        set: String,
        entry: String,
        url: String,
    },
    /// Two entries in one batch expand to the same path and method
    #[error("fixture '{set}:{entry}' duplicates {method} {path}")]
    DuplicateFixture {
        set: String,
        entry: String,
        method: String,
        path: String,
    },
}

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Invalid glob pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Loaded data breaks a catalog invariant
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
