//! Feature group types.

use crate::types::operation::OperationDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named group of related operations (e.g. `ONBOARDING`, `HRA`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGroup {
    /// Canonical feature key (`BASIC_PROFILE`)
    pub name: String,
    /// UI component backed by this feature (`BasicProfile`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Operation name (`GET`, `POST`, `GET_REPORT`) to descriptor
    pub operations: BTreeMap<String, OperationDescriptor>,
}

impl FeatureGroup {
    /// Look up an operation; names are compared upper-cased.
    pub fn operation(&self, operation_name: &str) -> Option<&OperationDescriptor> {
        self.operations
            .get(operation_name)
            .or_else(|| self.operations.get(&operation_name.to_ascii_uppercase()))
    }
}

/// Registry catalog file: the list of feature groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    pub features: Vec<FeatureGroup>,
}
