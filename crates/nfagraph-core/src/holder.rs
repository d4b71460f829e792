//! The NFA graph container.
//!
//! Vertices live in a flat vector indexed by `VertexId`. Edges live in a
//! slot vector indexed by `EdgeId`; removing an edge leaves an empty slot,
//! except that trailing empty slots are released so that removing the most
//! recently added edges restores the storage exactly.

use std::collections::BTreeSet;

use crate::{CharReach, EdgeId, ReportId, TopId, VertexId};

/// Properties attached to a vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct VertexProps {
    pub reach: CharReach,
    #[serde(default)]
    pub reports: BTreeSet<ReportId>,
}

impl VertexProps {
    pub fn new(reach: CharReach) -> Self {
        Self {
            reach,
            reports: BTreeSet::new(),
        }
    }

    pub fn with_report(mut self, report: ReportId) -> Self {
        self.reports.insert(report);
        self
    }
}

/// A directed edge and its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    /// Top that triggers this edge. Only meaningful on edges out of `start`.
    #[serde(default)]
    pub top: TopId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub(crate) struct VertexSlot {
    props: VertexProps,
    out_edges: Vec<EdgeId>,
    in_edges: Vec<EdgeId>,
}

/// Directed multigraph of NFA vertices with four fixed special vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct NfaGraph {
    vertices: Vec<VertexSlot>,
    edges: Vec<Option<Edge>>,
}

impl Default for NfaGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NfaGraph {
    /// Create a graph holding the specials and their standard edges:
    /// `start → startDs`, `startDs → startDs`, `accept → acceptEod`.
    pub fn new() -> Self {
        let mut g = Self::bare();
        g.add_edge(VertexId::START, VertexId::START_DS);
        g.add_edge(VertexId::START_DS, VertexId::START_DS);
        g.add_edge(VertexId::ACCEPT, VertexId::ACCEPT_EOD);
        g
    }

    /// Create a graph holding only the four specials, with no edges.
    pub fn bare() -> Self {
        Self {
            vertices: vec![VertexSlot::default(); VertexId::N_SPECIALS as usize],
            edges: Vec::new(),
        }
    }

    /// Add a plain vertex, returning its handle.
    pub fn add_vertex(&mut self, props: VertexProps) -> VertexId {
        let id = VertexId::from_raw(self.vertices.len() as u32);
        self.vertices.push(VertexSlot {
            props,
            ..VertexSlot::default()
        });
        id
    }

    /// Add an edge with default properties (top 0).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        self.add_edge_with_top(from, to, 0)
    }

    pub fn add_edge_with_top(&mut self, from: VertexId, to: VertexId, top: TopId) -> EdgeId {
        self.ensure_vertex(from);
        self.ensure_vertex(to);

        let id = EdgeId::from_raw(self.edges.len() as u32);
        self.edges.push(Some(Edge {
            source: from,
            target: to,
            top,
        }));
        self.vertices[from.index()].out_edges.push(id);
        self.vertices[to.index()].in_edges.push(id);
        id
    }

    /// Remove an edge. Returns the removed edge, or `None` if it was not present.
    ///
    /// Trailing free slots are released, so removing the newest edge makes its
    /// handle the next one `add_edge` returns. Drop handles to removed edges.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.get_mut(id.index())?.take()?;
        self.vertices[edge.source.index()]
            .out_edges
            .retain(|&e| e != id);
        self.vertices[edge.target.index()]
            .in_edges
            .retain(|&e| e != id);

        while let Some(None) = self.edges.last() {
            self.edges.pop();
        }
        Some(edge)
    }

    /// Remove every edge in `ids`, most recent first.
    pub fn remove_edges(&mut self, ids: &[EdgeId]) {
        for &id in ids.iter().rev() {
            self.remove_edge(id);
        }
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.vertices.len()
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_some()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())?.as_ref()
    }

    /// First edge `from → to`, if any.
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.out_edges(from)
            .find(|&e| self.ensure_edge(e).target == to)
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.find_edge(from, to).is_some()
    }

    pub fn props(&self, v: VertexId) -> &VertexProps {
        &self.ensure_vertex(v).props
    }

    pub fn props_mut(&mut self, v: VertexId) -> &mut VertexProps {
        self.ensure_vertex(v);
        &mut self.vertices[v.index()].props
    }

    /// Outgoing edges of `v` in insertion order.
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.ensure_vertex(v).out_edges.iter().copied()
    }

    /// Incoming edges of `v` in insertion order.
    pub fn in_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.ensure_vertex(v).in_edges.iter().copied()
    }

    /// Targets of the outgoing edges of `v`, one per edge.
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(v).map(|e| self.ensure_edge(e).target)
    }

    /// Sources of the incoming edges of `v`, one per edge.
    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_edges(v).map(|e| self.ensure_edge(e).source)
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.ensure_vertex(v).out_edges.len()
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        self.ensure_vertex(v).in_edges.len()
    }

    /// Iterate over all vertex handles, specials first.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.vertices.len() as u32).map(VertexId::from_raw)
    }

    /// Iterate over all plain vertex handles.
    pub fn plain_vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (VertexId::N_SPECIALS..self.vertices.len() as u32).map(VertexId::from_raw)
    }

    /// Iterate over live edges in handle order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| Some((EdgeId::from_raw(i as u32), e.as_ref()?)))
    }

    /// Number of vertices, specials included.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    pub fn num_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    /// Returns true if the graph holds no plain vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() == VertexId::N_SPECIALS as usize
    }

    pub(crate) fn vertex_slot(&self, v: VertexId) -> Option<&VertexSlot> {
        self.vertices.get(v.index())
    }
}
