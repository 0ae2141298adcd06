//! Fixture store keyed by concrete path and method.

use crate::config::error::CatalogError;
use crate::matching::substitute_all;
use crate::types::fixture::FixtureSet;
use crate::types::operation::HttpMethod;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Read-only mock payloads once built.
///
/// Each [`FixtureSet`] entry expands to one payload keyed by its concrete
/// path and the set's method. Sets added later replace earlier payloads for
/// the same key, which lets external fixture files override built-in ones.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    /// Concrete path to method to payload
    fixtures: HashMap<String, HashMap<HttpMethod, Value>>,
    /// Set id (component key) to its latest definition
    sets: HashMap<String, FixtureSet>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixture set.
    ///
    /// Fails if an entry leaves a placeholder unbound or two entries of the
    /// set expand to the same path; the store is unchanged on failure.
    pub fn add_set(&mut self, set: FixtureSet) -> Result<(), CatalogError> {
        let mut expanded: Vec<(String, Value)> = Vec::with_capacity(set.entries.len());

        for entry in &set.entries {
            let path = substitute_all(&set.url, &entry.params).ok_or_else(|| {
                CatalogError::MissingFixtureParam {
                    set: set.id.clone(),
                    entry: entry.id.clone(),
                    url: set.url.clone(),
                }
            })?;

            if expanded.iter().any(|(p, _)| *p == path) {
                return Err(CatalogError::DuplicateFixture {
                    set: set.id.clone(),
                    entry: entry.id.clone(),
                    method: set.method.to_string(),
                    path,
                });
            }
            expanded.push((path, entry.body.clone()));
        }

        for (path, body) in expanded {
            let by_method = self.fixtures.entry(path.clone()).or_default();
            if by_method.insert(set.method, body).is_some() {
                tracing::warn!(set = %set.id, method = %set.method, path, "fixture overridden");
            }
        }

        self.sets.insert(set.id.clone(), set);
        Ok(())
    }

    /// Add multiple fixture sets in order
    pub fn add_sets(&mut self, sets: Vec<FixtureSet>) -> Result<(), CatalogError> {
        for set in sets {
            self.add_set(set)?;
        }
        Ok(())
    }

    /// Exact lookup by concrete path and method.
    pub fn get(&self, path: &str, method: HttpMethod) -> Option<&Value> {
        self.fixtures.get(path)?.get(&method)
    }

    /// Payload for a UI component key, as the client-side accessor exposes it.
    ///
    /// With a step, a stepped set answers entry `step<n>`; without one it
    /// answers an object of all entries by id. A single-payload set answers
    /// its payload whatever the step.
    pub fn component_data(&self, component: &str, step: Option<&str>) -> Option<Value> {
        let set = self.sets.get(component)?;

        if !set.is_stepped() {
            return set.entries.first().map(|e| e.body.clone());
        }

        match step.filter(|s| !s.is_empty()) {
            Some(step) => {
                let id = format!("step{step}");
                set.entries
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.body.clone())
            }
            None => {
                let all: Map<String, Value> = set
                    .entries
                    .iter()
                    .map(|e| (e.id.clone(), e.body.clone()))
                    .collect();
                Some(Value::Object(all))
            }
        }
    }

    /// Every `(path, method)` key, sorted
    pub fn paths(&self) -> Vec<(&str, HttpMethod)> {
        let mut paths: Vec<(&str, HttpMethod)> = self
            .fixtures
            .iter()
            .flat_map(|(path, by_method)| by_method.keys().map(move |m| (path.as_str(), *m)))
            .collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.fixtures.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
