use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use miette::{Result, WrapErr};
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{ImportEdge, ModuleNode};
use crate::common::ConfigBuilder;
use crate::extractor::ImportExtractor;
use crate::progress::ProgressReporter;
use crate::utils::path::normalize_path;

/// Builder for constructing import graphs
///
/// Traverses the import statements reachable from an entry point and
/// records every importer → imported edge. Each module's imports are
/// extracted at most once, so the work is bounded by the number of
/// reachable modules rather than the number of import references; edges to
/// already-visited modules are still recorded.
pub struct ImportGraphBuilder {
    graph: DiGraph<ModuleNode, ImportEdge>,
    module_indices: HashMap<PathBuf, NodeIndex>,
}

impl Default for ImportGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportGraphBuilder {
    /// Create a new import graph builder
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            module_indices: HashMap::new(),
        }
    }

    /// One vertex per module identifier, created on first sight
    fn intern(&mut self, path: &Path) -> NodeIndex {
        if let Some(&idx) = self.module_indices.get(path) {
            return idx;
        }
        let idx = self.graph.add_node(ModuleNode::new(path.to_path_buf()));
        self.module_indices.insert(path.to_path_buf(), idx);
        idx
    }

    /// Build the graph of every module reachable from `entry`.
    ///
    /// Depth-first over an explicit work stack, so import chains of any
    /// length cannot overflow the call stack. Returns the entry point's
    /// node index. Failure to read any reachable module aborts the whole
    /// build; a partial graph could hide or fabricate cycles.
    pub fn build_from_entry(
        &mut self,
        entry: &Path,
        extractor: &ImportExtractor,
        progress: Option<&ProgressReporter>,
    ) -> Result<NodeIndex> {
        let entry_id = normalize_path(entry);
        let entry_idx = self.intern(&entry_id);

        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut pending: Vec<PathBuf> = vec![entry_id];

        while let Some(module) = pending.pop() {
            if !visited.insert(module.clone()) {
                continue;
            }

            if let Some(p) = progress {
                p.scanning_module(&module);
            }

            let from_idx = self.intern(&module);
            let imports = extractor.extract_imports(&module).wrap_err_with(|| {
                format!("Failed to extract imports from '{}'", module.display())
            })?;

            for import in imports {
                let to_idx = self.intern(import.target());

                let edge = ImportEdge::builder()
                    .with_specifier(import.specifier())
                    .with_line(import.line())
                    .build()
                    .wrap_err("Failed to build ImportEdge")?;

                // The edge is recorded even when the target was already
                // visited; only re-extraction of the target is skipped.
                self.graph.add_edge(from_idx, to_idx, edge);

                if !visited.contains(import.target()) {
                    pending.push(import.target().to_path_buf());
                }
            }
        }

        Ok(entry_idx)
    }

    pub fn graph(&self) -> &DiGraph<ModuleNode, ImportEdge> {
        &self.graph
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn import_count(&self) -> usize {
        self.graph.edge_count()
    }
}
