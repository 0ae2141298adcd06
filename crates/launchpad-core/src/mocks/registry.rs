//! Endpoint registry.
//!
//! `Registry` holds the declared feature groups and answers read-only lookups:
//! by feature and operation name, by UI component, and in reverse from a
//! concrete request path back to the operation that declares it.

use crate::config::error::CatalogError;
use crate::matching::{placeholders, template_matches};
use crate::types::feature::{FeatureCatalog, FeatureGroup};
use crate::types::operation::{HttpMethod, OperationDescriptor};
use std::collections::HashMap;

/// Declared operation matched from a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch<'a> {
    pub feature: &'a str,
    pub operation: &'a str,
    pub descriptor: &'a OperationDescriptor,
    /// Placeholder values captured from the path
    pub params: HashMap<String, String>,
}

/// Immutable set of feature groups.
///
/// Construction checks that feature names are unique and that every
/// operation's `path_params` list equals the placeholders of its template.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Feature groups in declaration order
    features: Vec<FeatureGroup>,
    /// Map of feature name to position in `features`
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry, validating catalog invariants.
    pub fn new(features: Vec<FeatureGroup>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(features.len());

        for (position, feature) in features.iter().enumerate() {
            if index.insert(feature.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateFeature {
                    feature: feature.name.clone(),
                });
            }

            for (operation, descriptor) in &feature.operations {
                let found = placeholders(&descriptor.path_template);
                if found != descriptor.path_params {
                    return Err(CatalogError::PathParamsMismatch {
                        feature: feature.name.clone(),
                        operation: operation.clone(),
                        template: descriptor.path_template.clone(),
                        declared: descriptor.path_params.clone(),
                        found,
                    });
                }
            }
        }

        Ok(Self { features, index })
    }

    pub fn from_catalog(catalog: FeatureCatalog) -> Result<Self, CatalogError> {
        Self::new(catalog.features)
    }

    /// Look up a descriptor; `None` for an unknown feature or operation.
    pub fn get_operation(
        &self,
        feature_name: &str,
        operation_name: &str,
    ) -> Option<&OperationDescriptor> {
        let descriptor = self
            .feature(feature_name)
            .and_then(|group| group.operation(operation_name));
        if descriptor.is_none() {
            tracing::debug!(feature_name, operation_name, "no such endpoint");
        }
        descriptor
    }

    pub fn feature(&self, name: &str) -> Option<&FeatureGroup> {
        self.index.get(name).map(|&i| &self.features[i])
    }

    pub fn features(&self) -> &[FeatureGroup] {
        &self.features
    }

    /// Feature group backing a UI component (`OnboardingScreen`, `HRA`).
    pub fn for_component(&self, component: &str) -> Option<&FeatureGroup> {
        self.features
            .iter()
            .find(|group| group.component.as_deref() == Some(component))
    }

    /// Find the operation declaring `path` for `method`.
    ///
    /// When several templates match, the one capturing the fewest parameters
    /// wins, so `/api/v1/hra/report` resolves to the report rather than to
    /// `/api/v1/hra/:step`.
    pub fn match_path(&self, method: HttpMethod, path: &str) -> Option<PathMatch<'_>> {
        let mut best: Option<PathMatch<'_>> = None;

        for group in &self.features {
            for (operation, descriptor) in &group.operations {
                if descriptor.http_method != method {
                    continue;
                }
                let result = template_matches(&descriptor.path_template, path);
                if !result.matched {
                    continue;
                }
                let better = best
                    .as_ref()
                    .map_or(true, |current| result.params.len() < current.params.len());
                if better {
                    best = Some(PathMatch {
                        feature: &group.name,
                        operation,
                        descriptor,
                        params: result.params,
                    });
                }
            }
        }

        best
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn op(method: HttpMethod, template: &str, params: &[&str]) -> OperationDescriptor {
        OperationDescriptor {
            http_method: method,
            path_template: template.to_string(),
            description: String::new(),
            path_params: params.iter().map(|p| p.to_string()).collect(),
            request_shape: BTreeMap::new(),
            response_shape: BTreeMap::new(),
            mock_data: None,
        }
    }

    fn group(name: &str, component: Option<&str>, ops: Vec<(&str, OperationDescriptor)>) -> FeatureGroup {
        FeatureGroup {
            name: name.to_string(),
            component: component.map(str::to_string),
            operations: ops
                .into_iter()
                .map(|(name, op)| (name.to_string(), op))
                .collect(),
        }
    }

    fn create_test_registry() -> Registry {
        Registry::new(vec![
            group(
                "HOME_PAGE",
                Some("HomePage"),
                vec![("GET", op(HttpMethod::Get, "/api/v1/home", &[]))],
            ),
            group(
                "HRA",
                Some("HRA"),
                vec![
                    ("GET", op(HttpMethod::Get, "/api/v1/hra/:step", &["step"])),
                    ("POST", op(HttpMethod::Post, "/api/v1/hra/:step/save", &["step"])),
                    ("GET_REPORT", op(HttpMethod::Get, "/api/v1/hra/report", &[])),
                ],
            ),
        ])
        .unwrap()
    }

    #[rstest]
    #[case("HRA", "GET", Some("/api/v1/hra/:step"))]
    #[case("HRA", "get_report", Some("/api/v1/hra/report"))]
    #[case("HOME_PAGE", "GET", Some("/api/v1/home"))]
    #[case("HOME_PAGE", "POST", None)]
    #[case("UNKNOWN", "GET", None)]
    #[case("hra", "GET", None)]
    fn test_get_operation(
        #[case] feature: &str,
        #[case] operation: &str,
        #[case] expected: Option<&str>,
    ) {
        let registry = create_test_registry();
        assert_eq!(
            registry
                .get_operation(feature, operation)
                .map(|d| d.path_template.as_str()),
            expected
        );
    }

    #[rstest]
    fn test_features_keep_declaration_order() {
        let registry = create_test_registry();
        let names: Vec<&str> = registry.features().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["HOME_PAGE", "HRA"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[rstest]
    fn test_duplicate_feature_rejected() {
        let result = Registry::new(vec![
            group("SEARCH", None, vec![]),
            group("SEARCH", None, vec![]),
        ]);
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::DuplicateFeature { .. }
        ));
    }

    #[rstest]
    #[case("/api/v1/hra/:step", &[])]
    #[case("/api/v1/hra/:step", &["id"])]
    #[case("/api/v1/hra/report", &["step"])]
    #[case("/api/v1/a/:x/b/:y", &["y", "x"])]
    fn test_path_params_mismatch_rejected(#[case] template: &str, #[case] params: &[&str]) {
        let result = Registry::new(vec![group(
            "BROKEN",
            None,
            vec![("GET", op(HttpMethod::Get, template, params))],
        )]);
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::PathParamsMismatch { .. }
        ));
    }

    #[rstest]
    #[case("HomePage", Some("HOME_PAGE"))]
    #[case("HRA", Some("HRA"))]
    #[case("SearchTab", None)]
    fn test_for_component(#[case] component: &str, #[case] expected: Option<&str>) {
        let registry = create_test_registry();
        assert_eq!(
            registry.for_component(component).map(|g| g.name.as_str()),
            expected
        );
    }

    #[rstest]
    #[case(HttpMethod::Get, "/api/v1/hra/2", Some(("HRA", "GET")), Some("2"))]
    #[case(HttpMethod::Get, "/api/v1/hra/report", Some(("HRA", "GET_REPORT")), None)]
    #[case(HttpMethod::Post, "/api/v1/hra/2/save", Some(("HRA", "POST")), Some("2"))]
    #[case(HttpMethod::Get, "/api/v1/home/", Some(("HOME_PAGE", "GET")), None)]
    #[case(HttpMethod::Post, "/api/v1/home", None, None)]
    #[case(HttpMethod::Get, "/api/v2/home", None, None)]
    fn test_match_path(
        #[case] method: HttpMethod,
        #[case] path: &str,
        #[case] expected: Option<(&str, &str)>,
        #[case] step: Option<&str>,
    ) {
        let registry = create_test_registry();
        let found = registry.match_path(method, path);
        assert_eq!(found.as_ref().map(|m| (m.feature, m.operation)), expected);
        if let Some(found) = found {
            assert_eq!(found.params.get("step").map(String::as_str), step);
        }
    }

    #[rstest]
    fn test_registry_default_is_empty() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.get_operation("HRA", "GET").is_none());
    }
}
