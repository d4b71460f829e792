//! Test utilities for building graphs and checking numberings.

use nfagraph_core::{CharReach, NfaGraph, TopId, VertexId, VertexProps};

use crate::StateMap;

/// Add a plain vertex matching the single byte `b`.
pub fn vertex(g: &mut NfaGraph, b: u8) -> VertexId {
    g.add_vertex(VertexProps::new(CharReach::byte(b)))
}

/// Add a chain of plain vertices, one per byte, linked in order.
pub fn chain(g: &mut NfaGraph, bytes: &[u8]) -> Vec<VertexId> {
    let vs: Vec<_> = bytes.iter().map(|&b| vertex(g, b)).collect();
    for pair in vs.windows(2) {
        g.add_edge(pair[0], pair[1]);
    }
    vs
}

/// Live edges as a sorted multiset of `(source, target, top)`.
pub fn edge_multiset(g: &NfaGraph) -> Vec<(VertexId, VertexId, TopId)> {
    let mut edges: Vec<_> = g
        .edges()
        .map(|(_, e)| (e.source, e.target, e.top))
        .collect();
    edges.sort_unstable();
    edges
}

/// Assert the assigned indices are exactly `0..k` with no repeats.
pub fn assert_dense(states: &StateMap) {
    let mut ids: Vec<u32> = states.iter().filter_map(|(_, s)| s.id()).collect();
    ids.sort_unstable();
    let expected: Vec<u32> = (0..ids.len() as u32).collect();
    assert_eq!(ids, expected, "state indices must be dense and unique");
}
