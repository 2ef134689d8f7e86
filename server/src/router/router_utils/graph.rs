//! Helper functions for working with graphs.

use std::collections::HashMap;

use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableDiGraph,
    visit::EdgeRef,
    Direction,
};

use crate::router::router_types::edge::{Cost, Edge};

/// Build a directed graph from a snapshot of route segments.
///
/// Every distinct label becomes one node; every edge is added as-is, so
/// parallel segments stay separate. Edges are added in slice order, which
/// makes a petgraph [`EdgeIndex`] a stable proxy for the caller's ordering.
///
/// # Arguments
/// * `edges` - The route segments, in the order the store listed them.
///
/// # Returns
/// The graph and a map from label to its node index.
///
/// # Time Complexity
/// *O*(*e*) for *e* edges.
pub fn build_graph(edges: &[Edge]) -> (StableDiGraph<&str, Cost>, HashMap<&str, NodeIndex>) {
    router_debug!("(build_graph) building graph from {} edges.", edges.len());
    let mut node_indices: HashMap<&str, NodeIndex> = HashMap::new();
    let mut graph = StableDiGraph::new();

    for edge in edges {
        let from_index = *node_indices
            .entry(edge.origin.as_str())
            .or_insert_with(|| graph.add_node(edge.origin.as_str()));
        let to_index = *node_indices
            .entry(edge.destination.as_str())
            .or_insert_with(|| graph.add_node(edge.destination.as_str()));
        graph.add_edge(from_index, to_index, edge.cost);
    }

    (graph, node_indices)
}

/// Outgoing neighbours of `node` paired with the edge cost, in the order
/// the edges were added to the graph.
///
/// petgraph walks adjacency lists newest-first, so the edges are re-sorted
/// by index.
pub fn outgoing_in_order(graph: &StableDiGraph<&str, Cost>, node: NodeIndex) -> Vec<(NodeIndex, Cost)> {
    let mut next: Vec<(EdgeIndex, NodeIndex, Cost)> = graph
        .edges_directed(node, Direction::Outgoing)
        .map(|edge| (edge.id(), edge.target(), *edge.weight()))
        .collect();
    next.sort_by_key(|(id, _, _)| *id);
    next.into_iter().map(|(_, to, cost)| (to, cost)).collect()
}
