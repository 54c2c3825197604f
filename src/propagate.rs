//! Fast cross-check solver: propagate rank offsets along the constraint graph.
//!
//! Every constraint `u -> v` of weight `w` becomes a pair of edges, `u -> v` weighted `w` and
//! `v -> u` weighted `-w`. Inside one connected component the constraints fix every rank relative
//! to any root, so a component is consistent iff a breadth-first walk never reaches a vertex with
//! two different offsets. With a single component the answer is then unique up to a shift, which
//! must map the offsets onto exactly `1..=n`.
//!
//! With several components the ranks of each one can still slide independently; deciding whether
//! they pack into `1..=n` is a search problem in its own right and is left to [`crate::search`].
use std::collections::VecDeque;
use log::debug;
use petgraph::{
    algo::connected_components,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use crate::constraint::{Instance, Vertex};
use crate::permutation::Permutation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Propagation {
    /// The unique satisfying permutation.
    Ranked(Permutation),
    /// Two paths between the same pair of vertices demand different differences.
    Inconsistent,
    /// The constraints are consistent but the implied ranks are not `1..=n`.
    NotAPermutation,
    /// Consistent, but split into independent components that propagation can't place.
    Underdetermined { components: usize },
}

/// Node `i` is vertex `i + 1`; edges carry the required rank difference `target - source`.
pub fn constraint_graph(instance: &Instance) -> DiGraph<Vertex, i128, u32> {
    let mut graph = DiGraph::with_capacity(instance.vertices, 2 * instance.constraints.len());
    for id in 1..=instance.vertices {
        graph.add_node(Vertex::new(id));
    }
    for c in &instance.constraints {
        let (from, to) = (NodeIndex::new(c.from.index()), NodeIndex::new(c.to.index()));
        graph.add_edge(from, to, c.weight as i128);
        graph.add_edge(to, from, -(c.weight as i128));
    }
    graph
}

/// Offsets relative to each component's lowest-numbered vertex, or `None` on a conflict.
fn offsets(graph: &DiGraph<Vertex, i128, u32>) -> Option<Vec<i128>> {
    let mut offsets: Vec<Option<i128>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    for root in graph.node_indices() {
        if offsets[root.index()].is_some() {
            continue;
        }
        offsets[root.index()] = Some(0);
        queue.push_back((root, 0i128));

        while let Some((node, base)) = queue.pop_front() {
            for edge in graph.edges(node) {
                let expected = base + *edge.weight();
                match offsets[edge.target().index()] {
                    None => {
                        offsets[edge.target().index()] = Some(expected);
                        queue.push_back((edge.target(), expected));
                    },
                    Some(found) if found != expected => {
                        debug!(
                            "vertex {} needs offset {} via vertex {}, already has {}",
                            graph[edge.target()], expected, graph[node], found,
                        );
                        return None;
                    },
                    Some(_) => (),
                }
            }
        }
    }

    offsets.into_iter().collect()
}

pub fn solve(instance: &Instance) -> Propagation {
    let graph = constraint_graph(instance);
    let offsets = match offsets(&graph) {
        Some(offsets) => offsets,
        None => return Propagation::Inconsistent,
    };

    let (min, max) = match (offsets.iter().min(), offsets.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Propagation::Ranked(Permutation::identity(0)),
    };

    let components = connected_components(&graph);
    if components > 1 {
        return Propagation::Underdetermined { components };
    }

    if max - min != instance.vertices as i128 - 1 {
        return Propagation::NotAPermutation;
    }
    match Permutation::new(offsets.iter().map(|&o| (o - min + 1) as usize)) {
        Some(p) => Propagation::Ranked(p),
        None => Propagation::NotAPermutation,
    }
}
