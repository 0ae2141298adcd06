//! Mock dispatcher for resolved request paths.
//!
//! `MockDispatcher` answers reads with the fixture stored for the exact
//! `(path, method)` pair and synthesizes a [`ResponseEnvelope`] for writes.

use crate::mocks::fixtures::FixtureStore;
use crate::types::envelope::ResponseEnvelope;
use crate::types::operation::HttpMethod;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Stepped save endpoints end in `/<step>/save`
static STEP_SAVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)/save$").expect("valid regex"));

#[derive(Debug, Clone, Copy)]
pub struct MockDispatcher<'a> {
    fixtures: &'a FixtureStore,
}

impl<'a> MockDispatcher<'a> {
    pub fn new(fixtures: &'a FixtureStore) -> Self {
        Self { fixtures }
    }

    /// Fixture for the exact path and method.
    ///
    /// The path must match a fixture key byte for byte; no template
    /// matching, trailing-slash folding or query parsing happens here.
    pub fn dispatch_read(&self, path: &str, method: HttpMethod) -> Option<&'a Value> {
        let fixture = self.fixtures.get(path, method);
        if fixture.is_none() {
            tracing::debug!(path, %method, "no fixture");
        }
        fixture
    }

    /// Canned response for a write to `path`.
    ///
    /// Depends only on its arguments: the same call always yields the same
    /// envelope.
    pub fn dispatch_write(&self, path: &str, body: Option<&Value>) -> ResponseEnvelope {
        let Some(body) = body.filter(|b| carries_data(b)) else {
            return ResponseEnvelope::validation_failure();
        };

        match current_step(path).and_then(|step| step.checked_add(1)) {
            Some(next_step) => ResponseEnvelope::navigation(next_step, body.clone()),
            None => ResponseEnvelope::saved(body.clone()),
        }
    }

    /// Route by method: writes get an envelope, everything else a fixture.
    pub fn dispatch(&self, path: &str, method: HttpMethod, body: Option<&Value>) -> Option<Value> {
        if method.is_write() {
            Some(self.dispatch_write(path, body).to_value())
        } else {
            self.dispatch_read(path, method).cloned()
        }
    }
}

/// Whether a request body has at least one field or element.
fn carries_data(body: &Value) -> bool {
    match body {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

fn current_step(path: &str) -> Option<u64> {
    STEP_SAVE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .and_then(|step| step.as_str().parse().ok())
}
