use std::collections::HashSet;
use std::path::PathBuf;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::tarjan::strongly_connected_components;
use crate::graph::{ImportEdge, ModuleNode};

/// Detector for finding import cycles in module graphs
///
/// Partitions the graph into strongly connected components and keeps the
/// components with two or more members. A single module is never a cycle,
/// even when it imports itself.
pub struct CycleDetector {
    cycles: Vec<ImportCycle>,
}

/// A group of modules that all (transitively) import each other
#[derive(Debug, Clone)]
pub struct ImportCycle {
    module_paths: Vec<PathBuf>,
    edges: Vec<CycleEdge>,
}

impl ImportCycle {
    /// Member modules, sorted for deterministic output
    pub fn module_paths(&self) -> &[PathBuf] {
        &self.module_paths
    }

    /// Every import edge between members of this cycle
    pub fn edges(&self) -> &[CycleEdge] {
        &self.edges
    }
}

/// A single import statement participating in a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEdge {
    pub from: PathBuf,
    pub to: PathBuf,
    pub specifier: String,
    pub line: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect all import cycles in the graph.
    ///
    /// Components are recorded in the order the search produces them;
    /// membership is what matters, and it is independent of that order.
    pub fn detect_cycles(&mut self, graph: &DiGraph<ModuleNode, ImportEdge>) {
        for component in strongly_connected_components(graph) {
            if component.len() > 1 {
                self.collect_cycle(graph, component);
            }
        }
    }

    fn collect_cycle(&mut self, graph: &DiGraph<ModuleNode, ImportEdge>, component: Vec<NodeIndex>) {
        let member_set: HashSet<NodeIndex> = component.iter().copied().collect();

        let mut module_paths: Vec<PathBuf> = component
            .iter()
            .map(|&idx| graph[idx].path.clone())
            .collect();
        module_paths.sort();

        let mut edges = Vec::new();
        for &from_idx in &component {
            for edge in graph.edges(from_idx) {
                if member_set.contains(&edge.target()) {
                    edges.push(CycleEdge {
                        from: graph[from_idx].path.clone(),
                        to: graph[edge.target()].path.clone(),
                        specifier: edge.weight().specifier.clone(),
                        line: edge.weight().line,
                    });
                }
            }
        }
        edges.sort_by(|a, b| (&a.from, a.line).cmp(&(&b.from, b.line)));

        self.cycles.push(ImportCycle {
            module_paths,
            edges,
        });
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[ImportCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}
