//! # Healthtrack
//!
//! Single-session health metrics calculator with a terminal UI.
//!
//! This crate provides:
//! - BMI and waist-to-hip ratio computation with fixed clinical thresholds
//! - An append-only, in-memory measurement history owned by the session
//! - A terminal UI with gauge visualizations and trend charts
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (Measurement, ComputedMetrics, HistoryRecord)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (in-memory history, log sanitizer)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{compute, BmiCategory, ComputedMetrics, HistoryRecord, Measurement, Sex, WhrRisk};

/// Result type for Healthtrack operations
pub type Result<T> = std::result::Result<T, HealthtrackError>;

/// Main error type for Healthtrack
#[derive(Debug, thiserror::Error)]
pub enum HealthtrackError {
    #[error("Metrics computation failed: {0}")]
    Metrics(#[from] domain::MetricsError),

    #[error("Invalid measurement: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
