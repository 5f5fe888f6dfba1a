//! Core graph types
//!
//! This module contains the fundamental data structures used in the import
//! graph.

use std::path::PathBuf;

/// A module vertex in the import graph, identified by its normalized path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub path: PathBuf,
}

impl ModuleNode {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// A single import statement connecting two modules
///
/// The endpoints live in the graph topology; the weight carries what the
/// statement looked like in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    pub specifier: String,
    pub line: usize,
}

impl ImportEdge {
    pub fn builder() -> ImportEdgeBuilder {
        ImportEdgeBuilder::new()
    }
}

pub struct ImportEdgeBuilder {
    specifier: Option<String>,
    line: Option<usize>,
}

impl Default for ImportEdgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportEdgeBuilder {
    pub fn new() -> Self {
        Self {
            specifier: None,
            line: None,
        }
    }

    pub fn with_specifier(mut self, specifier: &str) -> Self {
        self.specifier = Some(specifier.to_string());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl crate::common::ConfigBuilder for ImportEdgeBuilder {
    type Config = ImportEdge;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(ImportEdge {
            specifier: self.specifier.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: specifier".to_string(),
                }
            })?,
            line: self.line.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: line".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_import_edge_builder() {
        let edge = ImportEdge::builder()
            .with_specifier("./a.js")
            .with_line(3)
            .build()
            .unwrap();

        assert_eq!(edge.specifier, "./a.js");
        assert_eq!(edge.line, 3);
    }

    #[test]
    fn test_import_edge_builder_requires_specifier() {
        let result = ImportEdge::builder().with_line(1).build();
        assert!(result.is_err());
    }
}
