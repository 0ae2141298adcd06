//! Synthesized write-operation responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const REQUEST_DATA_REQUIRED: &str = "Request data is required";
pub const NAVIGATION_SUCCESSFUL: &str = "Navigation successful";
pub const DATA_SAVED: &str = "Data saved successfully";

/// Response wrapper returned for write operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<u64>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl ResponseEnvelope {
    /// Rejected write: the request carried no data.
    pub fn validation_failure() -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("general".to_string(), REQUEST_DATA_REQUIRED.to_string());
        Self {
            success: false,
            next_step: None,
            message: VALIDATION_FAILED.to_string(),
            saved_data: None,
            validation_errors: Some(errors),
        }
    }

    /// Step saved; the client advances to `next_step`.
    pub fn navigation(next_step: u64, saved_data: Value) -> Self {
        Self {
            success: true,
            next_step: Some(next_step),
            message: NAVIGATION_SUCCESSFUL.to_string(),
            saved_data: Some(saved_data),
            validation_errors: None,
        }
    }

    pub fn saved(saved_data: Value) -> Self {
        Self {
            success: true,
            next_step: None,
            message: DATA_SAVED.to_string(),
            saved_data: Some(saved_data),
            validation_errors: None,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
