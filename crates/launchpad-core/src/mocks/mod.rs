//! Endpoint lookup and mock responses.
//!
//! - [`Registry`]: declared feature groups and their operations
//! - [`Resolver`]: binds path parameters into registry templates
//! - [`FixtureStore`]: mock payloads keyed by concrete path and method
//! - [`MockDispatcher`]: answers resolved requests from the fixture store

pub mod dispatcher;
pub mod fixtures;
pub mod registry;
pub mod resolver;

pub use dispatcher::MockDispatcher;
pub use fixtures::FixtureStore;
pub use registry::{PathMatch, Registry};
pub use resolver::Resolver;
