//! # Import Graph Module
//!
//! Builds and renders the directed graph of import relationships reachable
//! from an entry-point module.
//!
//! ## Key Components
//!
//! - **ImportGraphBuilder**: traverses imports from the entry point and
//!   records every importer → imported edge
//! - **ModuleNode / ImportEdge**: vertex and edge weights of the graph
//! - **TreeRenderer**: prints the reachable graph as an indented tree

pub mod builder;
pub mod renderer;
pub mod types;

pub use builder::ImportGraphBuilder;
pub use renderer::TreeRenderer;
pub use types::{ImportEdge, ModuleNode};
