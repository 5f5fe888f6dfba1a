use std::collections::HashSet;
use std::fmt::Write;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{ImportEdge, ModuleNode};
use crate::error::RoundaboutError;

/// Renders the reachable import graph as an indented tree
///
/// The first occurrence of a module is expanded; later occurrences are
/// marked `(seen)` and not descended into, so cyclic graphs render in
/// finite form.
pub struct TreeRenderer;

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        graph: &DiGraph<ModuleNode, ImportEdge>,
        entry: NodeIndex,
    ) -> Result<String, RoundaboutError> {
        let mut output = String::new();
        let mut expanded: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<(NodeIndex, usize)> = vec![(entry, 0)];

        while let Some((node, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            let path = graph[node].path.display();

            if !expanded.insert(node) {
                writeln!(output, "{indent}{path} (seen)")?;
                continue;
            }
            writeln!(output, "{indent}{path}")?;

            // neighbors() walks the adjacency list newest-edge-first, which
            // is exactly the push order a LIFO needs to pop the first
            // import first
            for child in graph.neighbors(node) {
                stack.push((child, depth + 1));
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn node(graph: &mut DiGraph<ModuleNode, ImportEdge>, path: &str) -> NodeIndex {
        graph.add_node(ModuleNode::new(PathBuf::from(path)))
    }

    fn edge(graph: &mut DiGraph<ModuleNode, ImportEdge>, from: NodeIndex, to: NodeIndex) {
        let specifier = format!("./{}", graph[to].path.display());
        graph.add_edge(
            from,
            to,
            ImportEdge {
                specifier,
                line: 1,
            },
        );
    }

    #[test]
    fn test_renders_chain_with_indentation() {
        let mut graph = DiGraph::new();
        let a = node(&mut graph, "a.js");
        let b = node(&mut graph, "b.js");
        let c = node(&mut graph, "c.js");
        edge(&mut graph, a, b);
        edge(&mut graph, b, c);

        let output = TreeRenderer::new().render(&graph, a).unwrap();

        assert_eq!(output, "a.js\n  b.js\n    c.js\n");
    }

    #[test]
    fn test_imports_print_in_source_order() {
        let mut graph = DiGraph::new();
        let a = node(&mut graph, "a.js");
        let b = node(&mut graph, "b.js");
        let c = node(&mut graph, "c.js");
        edge(&mut graph, a, b);
        edge(&mut graph, a, c);

        let output = TreeRenderer::new().render(&graph, a).unwrap();

        assert_eq!(output, "a.js\n  b.js\n  c.js\n");
    }

    #[test]
    fn test_cycle_prints_seen_marker_and_terminates() {
        let mut graph = DiGraph::new();
        let a = node(&mut graph, "a.js");
        let b = node(&mut graph, "b.js");
        edge(&mut graph, a, b);
        edge(&mut graph, b, a);

        let output = TreeRenderer::new().render(&graph, a).unwrap();

        assert_eq!(output, "a.js\n  b.js\n    a.js (seen)\n");
    }

    #[test]
    fn test_shared_module_expanded_once() {
        let mut graph = DiGraph::new();
        let a = node(&mut graph, "a.js");
        let b = node(&mut graph, "b.js");
        let c = node(&mut graph, "c.js");
        edge(&mut graph, a, b);
        edge(&mut graph, a, c);
        edge(&mut graph, b, c);

        let output = TreeRenderer::new().render(&graph, a).unwrap();

        assert_eq!(output, "a.js\n  b.js\n    c.js\n  c.js (seen)\n");
    }
}
