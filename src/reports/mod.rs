//! Report generation modules for different output formats
//!
//! This module contains report generators for the supported output formats:
//! - human: Human-readable console output, silent when the graph is clean
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::detector::CycleDetector;
use crate::error::RoundaboutError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, RoundaboutError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
