//! Endpoint catalog and mock responses for the Launchpad wellness API.
//!
//! The catalog declares every REST operation the onboarding app calls,
//! grouped by feature (`HOME_PAGE`, `ONBOARDING`, `HRA`, ...). A
//! [`Resolver`](mocks::Resolver) binds step numbers into path templates and a
//! [`MockDispatcher`](mocks::MockDispatcher) answers the resolved request from
//! fixtures, or with a canned envelope for writes.
//!
//! ```ignore
//! use launchpad_core::catalog::Catalog;
//!
//! let catalog = Catalog::global();
//! let op = catalog.resolver().resolve("HRA", "GET", Some("3")).unwrap();
//! let body = catalog.dispatcher().dispatch_read(&op.path_template, op.http_method);
//! ```

pub mod catalog;
pub mod config;
pub mod health;
pub mod matching;
pub mod mocks;
pub mod types;
