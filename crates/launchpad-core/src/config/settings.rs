//! API client settings.

use std::collections::BTreeMap;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "LAUNCHPAD_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Settings shared by every call to the real backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing `/`
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers,
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for environment variables; a missing or blank
    /// base URL falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(&url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for `path` on the backend
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
