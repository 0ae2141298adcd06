//! Fixture set types.

use crate::types::operation::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Fixture payloads served for one path template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Component key (`onboarding`, `basicProfile`)
    pub id: String,
    /// HTTP method the fixtures answer
    pub method: HttpMethod,
    /// Path template (supports `:name` placeholders)
    pub url: String,
    /// One entry per concrete path
    pub entries: Vec<FixtureEntry>,
}

/// Single payload, keyed by the values bound into the set's template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureEntry {
    /// Entry identifier (`step1`, `default`)
    pub id: String,
    /// Placeholder values
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
    /// Response body (JSON)
    pub body: Value,
}

impl FixtureSet {
    /// A set is stepped when its entries are told apart by path params.
    pub fn is_stepped(&self) -> bool {
        self.entries.iter().any(|e| !e.params.is_empty())
    }
}
