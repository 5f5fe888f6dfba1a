//! # Cycle Detection Module
//!
//! Finds circular imports in the module graph.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm, implemented here with
//! an explicit frame stack instead of recursion. One pass over the graph in
//! O(V + E) assigns every vertex to exactly one component; components with
//! two or more members are import cycles.
//!
//! ## Key Components
//!
//! - **strongly_connected_components**: the SCC partition itself
//! - **CycleDetector**: filters the partition down to reportable cycles
//! - **ImportCycle / CycleEdge**: a detected cycle and the import
//!   statements that create it
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use petgraph::graph::DiGraph;
//! use roundabout::detector::CycleDetector;
//! use roundabout::graph::{ImportEdge, ModuleNode};
//!
//! let mut graph = DiGraph::new();
//! let a = graph.add_node(ModuleNode::new(PathBuf::from("a.js")));
//! let b = graph.add_node(ModuleNode::new(PathBuf::from("b.js")));
//!
//! // a and b import each other
//! graph.add_edge(a, b, ImportEdge { specifier: "./b.js".into(), line: 1 });
//! graph.add_edge(b, a, ImportEdge { specifier: "./a.js".into(), line: 1 });
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 1);
//! ```

mod detector_impl;
mod tarjan;

pub use detector_impl::*;
pub use tarjan::strongly_connected_components;
