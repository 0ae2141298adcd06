//! Core domain types for features, operations, fixtures, and envelopes.

pub mod envelope;
pub mod feature;
pub mod fixture;
pub mod operation;
