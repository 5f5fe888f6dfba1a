//! Strongly connected components via Tarjan's algorithm
//!
//! Single pass, O(V + E). The usual recursive depth-first search is
//! rewritten as an explicit frame stack so that arbitrarily long import
//! chains cannot overflow the call stack; the algorithm itself is
//! unchanged.

use petgraph::graph::{DefaultIx, DiGraph, NodeIndex, WalkNeighbors};

/// Sentinel for a vertex the search has not reached yet
const UNDISCOVERED: u32 = u32::MAX;

#[derive(Clone, Copy)]
struct VertexState {
    discovery: u32,
    low_link: u32,
    on_stack: bool,
}

/// One suspended depth-first visit: the vertex and its remaining
/// unexplored successors
struct Frame {
    node: NodeIndex,
    successors: WalkNeighbors<DefaultIx>,
}

/// Compute the strongly connected components of `graph`.
///
/// Every vertex appears in exactly one component, including vertices with
/// no edges at all. Component membership is independent of iteration
/// order; the emission order and the order within a component are not.
pub fn strongly_connected_components<N, E>(graph: &DiGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let mut states = vec![
        VertexState {
            discovery: UNDISCOVERED,
            low_link: UNDISCOVERED,
            on_stack: false,
        };
        graph.node_count()
    ];
    let mut next_discovery: u32 = 0;
    let mut component_stack: Vec<NodeIndex> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();

    for start in graph.node_indices() {
        if states[start.index()].discovery != UNDISCOVERED {
            continue;
        }

        discover(
            start,
            &mut states,
            &mut next_discovery,
            &mut component_stack,
        );
        frames.push(Frame {
            node: start,
            successors: graph.neighbors(start).detach(),
        });

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            let next = frame.successors.next_node(graph);

            match next {
                Some(w) => {
                    let w_state = states[w.index()];
                    if w_state.discovery == UNDISCOVERED {
                        discover(w, &mut states, &mut next_discovery, &mut component_stack);
                        frames.push(Frame {
                            node: w,
                            successors: graph.neighbors(w).detach(),
                        });
                    } else if w_state.on_stack {
                        // Back-edge into the in-progress part of the walk;
                        // edges into already-closed components contribute
                        // nothing
                        let v_state = &mut states[v.index()];
                        v_state.low_link = v_state.low_link.min(w_state.discovery);
                    }
                }
                None => {
                    // All successors explored: close the vertex
                    frames.pop();
                    let v_state = states[v.index()];

                    if v_state.low_link == v_state.discovery {
                        // v roots a maximal strongly connected subtree;
                        // everything above it on the stack belongs to it
                        let mut component = Vec::new();
                        while let Some(w) = component_stack.pop() {
                            states[w.index()].on_stack = false;
                            component.push(w);
                            if w == v {
                                break;
                            }
                        }
                        components.push(component);
                    }

                    if let Some(parent) = frames.last() {
                        let parent_state = &mut states[parent.node.index()];
                        parent_state.low_link = parent_state.low_link.min(v_state.low_link);
                    }
                }
            }
        }
    }

    components
}

fn discover(
    node: NodeIndex,
    states: &mut [VertexState],
    next_discovery: &mut u32,
    component_stack: &mut Vec<NodeIndex>,
) {
    let state = &mut states[node.index()];
    state.discovery = *next_discovery;
    state.low_link = *next_discovery;
    state.on_stack = true;
    *next_discovery += 1;
    component_stack.push(node);
}
