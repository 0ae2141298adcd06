//! Catalog file loading and API settings.

pub mod error;
pub mod parser;
pub mod settings;

pub use error::{CatalogError, ConfigError};
pub use settings::ApiConfig;
