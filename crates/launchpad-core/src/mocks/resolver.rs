//! Binds path parameters into registry templates.

use crate::matching::{normalize_feature_name, substitute_first};
use crate::mocks::registry::Registry;
use crate::types::operation::OperationDescriptor;

/// Best-effort lookup layer over a [`Registry`].
///
/// Every miss is `None`; malformed names are never an error.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve a descriptor, binding `path_param` into the first placeholder.
    ///
    /// Only the first placeholder is replaced; templates with several
    /// placeholders keep the rest. A value for a template without
    /// placeholders is ignored, as is an empty value.
    pub fn resolve(
        &self,
        feature_name: &str,
        operation_name: &str,
        path_param: Option<&str>,
    ) -> Option<OperationDescriptor> {
        let descriptor = self.registry.get_operation(feature_name, operation_name)?;
        let mut resolved = descriptor.clone();

        if let Some(value) = path_param.filter(|v| !v.is_empty()) {
            resolved.path_template = substitute_first(&descriptor.path_template, value);
        }

        tracing::debug!(
            feature_name,
            operation_name,
            path = %resolved.path_template,
            "resolved endpoint"
        );
        Some(resolved)
    }

    /// Resolve with a numeric step value.
    pub fn resolve_step(
        &self,
        feature_name: &str,
        operation_name: &str,
        step: u32,
    ) -> Option<OperationDescriptor> {
        self.resolve(feature_name, operation_name, Some(&step.to_string()))
    }

    /// Resolve from a free-form feature name such as `basicProfile`.
    pub fn resolve_component(
        &self,
        name: &str,
        operation_name: &str,
        path_param: Option<&str>,
    ) -> Option<OperationDescriptor> {
        let key = normalize_feature_name(name);
        self.resolve(&key, operation_name, path_param)
    }
}
