//! # Roundabout - Detect Circular Imports
//!
//! Roundabout follows the import statements of a source tree, starting from
//! an entry-point module, and reports every group of modules that import
//! each other in a circle.
//!
//! ## Main Components
//!
//! - **Extractor**: Reads a module and extracts its direct imports
//! - **Graph**: Builds the directed import graph reachable from the entry
//!   point
//! - **Detector**: Partitions the graph into strongly connected components
//!   (Tarjan's algorithm) and keeps the components that are cycles
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use roundabout::detector::CycleDetector;
//! use roundabout::extractor::ImportExtractor;
//! use roundabout::graph::ImportGraphBuilder;
//! use roundabout::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Build the import graph reachable from the entry point
//! let extractor = ImportExtractor::new();
//! let mut graph_builder = ImportGraphBuilder::new();
//! graph_builder.build_from_entry(Path::new("lib/run_tests.js"), &extractor, None)?;
//!
//! // Step 2: Detect circular imports
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(graph_builder.graph());
//!
//! // Step 3: Report them; a clean graph produces an empty report
//! if detector.has_cycles() {
//!     let report = HumanReportGenerator::new(None);
//!     print!("{}", report.generate_report(&detector).expect("report"));
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod extractor;
pub mod graph;
pub mod progress;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
