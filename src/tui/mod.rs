//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a health-themed interface for:
//! - Dashboard with session status and reference bands
//! - Measurement entry
//! - Result gauges and recommendations
//! - History table with trend charts

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::HealthTheme;
