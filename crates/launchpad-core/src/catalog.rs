//! Built-in endpoint catalog and fixtures.
//!
//! The registry and fixture tables ship inside the library: the registry as
//! YAML under `catalog/`, the fixtures as JSON fixture sets under
//! `fixtures/`. [`Catalog::global`] builds them once per process; callers
//! that need other data use [`Catalog::load`].

use crate::config::error::ConfigError;
use crate::config::parser::{load_feature_catalog, load_fixture_sets, parse_fixture_sets, parse_yaml};
use crate::mocks::{FixtureStore, MockDispatcher, Registry, Resolver};
use crate::types::feature::FeatureCatalog;
use crate::types::fixture::FixtureSet;
use std::path::Path;
use std::sync::OnceLock;

const ENDPOINTS: &str = include_str!("../catalog/endpoints.yaml");

const FIXTURES: &[(&str, &str)] = &[
    ("homePage.json", include_str!("../fixtures/homePage.json")),
    ("wellness.json", include_str!("../fixtures/wellness.json")),
    ("onboarding.json", include_str!("../fixtures/onboarding.json")),
    ("basicProfile.json", include_str!("../fixtures/basicProfile.json")),
    ("goalSelect.json", include_str!("../fixtures/goalSelect.json")),
    ("trackerSelection.json", include_str!("../fixtures/trackerSelection.json")),
    ("hra.json", include_str!("../fixtures/hra.json")),
    ("activityTracker.json", include_str!("../fixtures/activityTracker.json")),
    ("search.json", include_str!("../fixtures/search.json")),
];

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Endpoint registry paired with the fixtures that serve it.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: Registry,
    fixtures: FixtureStore,
}

impl Catalog {
    pub fn new(registry: Registry, fixtures: FixtureStore) -> Self {
        Self { registry, fixtures }
    }

    /// Build from the data embedded in the library.
    pub fn builtin() -> Result<Self, ConfigError> {
        let features: FeatureCatalog = parse_yaml(ENDPOINTS)?;
        let registry = Registry::from_catalog(features)?;

        let mut fixtures = FixtureStore::new();
        fixtures.add_sets(builtin_fixture_sets()?)?;

        tracing::info!(
            features = registry.len(),
            fixtures = fixtures.len(),
            "built-in catalog ready"
        );
        Ok(Self::new(registry, fixtures))
    }

    /// Process-wide built-in catalog, built on first use.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| Catalog::builtin().expect("embedded catalog is valid"))
    }

    /// Build from files.
    ///
    /// `registry_path` replaces the embedded registry when given. Fixture
    /// sets matched by `fixture_patterns` are layered over the built-in
    /// fixtures, replacing payloads with the same path and method.
    pub fn load<S: AsRef<str>>(
        registry_path: Option<&Path>,
        fixture_patterns: &[S],
    ) -> Result<Self, ConfigError> {
        let features = match registry_path {
            Some(path) => load_feature_catalog(path)?,
            None => parse_yaml(ENDPOINTS)?,
        };
        let registry = Registry::from_catalog(features)?;

        let mut fixtures = FixtureStore::new();
        fixtures.add_sets(builtin_fixture_sets()?)?;
        fixtures.add_sets(load_fixture_sets(fixture_patterns)?)?;

        tracing::info!(
            features = registry.len(),
            fixtures = fixtures.len(),
            "catalog loaded"
        );
        Ok(Self::new(registry, fixtures))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry)
    }

    pub fn dispatcher(&self) -> MockDispatcher<'_> {
        MockDispatcher::new(&self.fixtures)
    }
}

fn builtin_fixture_sets() -> Result<Vec<FixtureSet>, ConfigError> {
    let mut sets = Vec::new();
    for (name, content) in FIXTURES {
        sets.extend(parse_fixture_sets(content, name)?);
    }
    Ok(sets)
}
