//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integrations:
//! - `memory`: Vec-backed session history
//! - `sanitize`: PII filtering for logs

pub mod memory;
pub mod sanitize;
