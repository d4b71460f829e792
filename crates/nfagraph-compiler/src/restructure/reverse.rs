//! Edge-reversed copies of a graph.

use nfagraph_core::{NfaGraph, Special, VertexId};
use tracing::debug;

/// Input vertex → reversed-graph vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexMap {
    targets: Vec<VertexId>,
}

impl VertexMap {
    pub fn get(&self, v: VertexId) -> Option<VertexId> {
        self.targets.get(v.index()).copied()
    }

    /// Input vertex mapped to `v` in the reversed graph.
    pub fn source_of(&self, v: VertexId) -> Option<VertexId> {
        let i = self.targets.iter().position(|&t| t == v)?;
        Some(VertexId::from_raw(i as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .map(|(i, &t)| (VertexId::from_raw(i as u32), t))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A reversed graph together with its vertex correspondence.
#[derive(Debug, Clone)]
pub struct Reversed {
    pub graph: NfaGraph,
    pub vertex_map: VertexMap,
}

/// Build the edge-reversed image of `g`, mapping starts to accepts.
///
/// Specials swap roles (`start ↔ acceptEod`, `startDs ↔ accept`). Plain
/// vertices keep their properties and relative order. Every edge `u → v`
/// becomes `map(v) → map(u)` with its properties, in input edge order, so
/// reversing twice gives back `g` when it has no removed-edge holes.
pub fn reverse_holder(g: &NfaGraph) -> Reversed {
    let mut out = NfaGraph::bare();
    let targets: Vec<VertexId> = g
        .vertices()
        .map(|v| match v.special() {
            Some(Special::Start) => VertexId::ACCEPT_EOD,
            Some(Special::StartDotStar) => VertexId::ACCEPT,
            Some(Special::Accept) => VertexId::START_DS,
            Some(Special::AcceptEod) => VertexId::START,
            None => out.add_vertex(g.props(v).clone()),
        })
        .collect();

    for (_, edge) in g.edges() {
        out.add_edge_with_top(
            targets[edge.target.index()],
            targets[edge.source.index()],
            edge.top,
        );
    }

    debug!(
        vertices = out.num_vertices(),
        edges = out.num_edges(),
        "reversed graph"
    );
    debug_assert_eq!(out.num_vertices(), g.num_vertices());
    debug_assert_eq!(out.num_edges(), g.num_edges());

    Reversed {
        graph: out,
        vertex_map: VertexMap { targets },
    }
}
