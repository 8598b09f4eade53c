//! Application layer: Use cases orchestrating domain and ports.

mod assessment;
mod trends;

pub use assessment::AssessmentService;
pub use trends::TrendSummary;
