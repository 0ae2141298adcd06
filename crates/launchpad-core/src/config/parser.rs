//! Catalog and fixture file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use crate::types::feature::FeatureCatalog;
use crate::types::fixture::FixtureSet;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments outside of string literals.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            ('/', Some('/')) => {
                // Line breaks survive so error positions stay meaningful
                for next in chars.by_ref() {
                    if next == '\n' || next == '\r' {
                        result.push(next);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let stripped = strip_json_comments(content);
    serde_json::from_str(&stripped).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse config content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Read and parse a config file
pub fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, &path.to_string_lossy())
}

/// Expand glob patterns into a sorted, de-duplicated file list.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, ConfigError> {
    let mut files = Vec::new();
    for pattern in patterns {
        for entry in glob::glob(pattern.as_ref())? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => {
                    let path = e.path().to_path_buf();
                    return Err(ConfigError::Io {
                        path,
                        source: e.into_error(),
                    });
                }
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// A fixture file holds one set or a list of sets.
#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    One(FixtureSet),
    Many(Vec<FixtureSet>),
}

impl FixtureFile {
    fn into_sets(self) -> Vec<FixtureSet> {
        match self {
            FixtureFile::One(set) => vec![set],
            FixtureFile::Many(sets) => sets,
        }
    }
}

/// Parse fixture content; accepts a single set or a list of sets.
pub fn parse_fixture_sets(content: &str, path: &str) -> Result<Vec<FixtureSet>, ConfigError> {
    parse_config::<FixtureFile>(content, path).map(FixtureFile::into_sets)
}

/// Load fixture sets from every file matched by `patterns`.
pub fn load_fixture_sets<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<FixtureSet>, ConfigError> {
    let mut sets = Vec::new();
    for path in expand_patterns(patterns)? {
        let file: FixtureFile = read_config(&path)?;
        let loaded = file.into_sets();
        tracing::debug!(path = %path.display(), sets = loaded.len(), "loaded fixture file");
        sets.extend(loaded);
    }
    Ok(sets)
}

/// Load a feature catalog file.
pub fn load_feature_catalog(path: &Path) -> Result<FeatureCatalog, ConfigError> {
    let catalog: FeatureCatalog = read_config(path)?;
    tracing::debug!(path = %path.display(), features = catalog.features.len(), "loaded feature catalog");
    Ok(catalog)
}
