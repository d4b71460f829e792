//! Temporary single-source wiring of tops.
//!
//! Many graph algorithms (dominators, single-source traversals, layering)
//! need one root. Wiring adds a `start → v` edge per top; removing exactly
//! the returned edges restores the original graph.

use std::ops::Deref;

use nfagraph_core::{EdgeId, NfaGraph, Tops, VertexId};
use tracing::trace;

use crate::{Error, Result};

/// Check that every top names a vertex of `g` other than an accept.
///
/// A top may name `start` or `startDs`; wiring it adds a self-loop or a
/// parallel `start → startDs` edge.
pub(crate) fn check_tops(g: &NfaGraph, tops: &Tops) -> Result<()> {
    for (&top, &vertex) in tops {
        if !g.contains_vertex(vertex) {
            return Err(Error::DanglingTop { top, vertex });
        }
        if vertex.is_any_accept() {
            return Err(Error::AcceptTop { top, vertex });
        }
    }
    Ok(())
}

/// Connect `start` to each vertex in `tops`, in top-ID order.
///
/// The new edges carry their top ID and are appended to `added`. Tops are
/// validated before any edge is added. Calling this twice without removing
/// the first batch adds a second, parallel batch.
pub fn wire_start_to_tops(
    g: &mut NfaGraph,
    tops: &Tops,
    added: &mut Vec<EdgeId>,
) -> Result<()> {
    check_tops(g, tops)?;
    for (&top, &v) in tops {
        let e = g.add_edge_with_top(VertexId::START, v, top);
        trace!(top, %v, %e, "wired top");
        added.push(e);
    }
    Ok(())
}

/// Remove edges added by `wire_start_to_tops`.
///
/// Call once per batch, before any other edge is added. Freed edge handles
/// are handed out again, so a stale or repeated `added` list can remove an
/// unrelated edge.
pub fn unwire_tops(g: &mut NfaGraph, added: &[EdgeId]) {
    g.remove_edges(added);
}

/// Graph with tops wired to `start` for the lifetime of the guard.
///
/// The added edges are removed when the guard drops, on every exit path.
pub struct WiredTops<'g> {
    graph: &'g mut NfaGraph,
    edges: Vec<EdgeId>,
}

impl<'g> WiredTops<'g> {
    pub fn new(graph: &'g mut NfaGraph, tops: &Tops) -> Result<Self> {
        let mut edges = Vec::with_capacity(tops.len());
        wire_start_to_tops(graph, tops, &mut edges)?;
        Ok(Self { graph, edges })
    }

    /// Edges added for the tops, in top-ID order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

impl Deref for WiredTops<'_> {
    type Target = NfaGraph;

    fn deref(&self) -> &NfaGraph {
        &*self.graph
    }
}

impl Drop for WiredTops<'_> {
    fn drop(&mut self) {
        debug_assert!(
            self.edges.iter().all(|&e| self
                .graph
                .edge(e)
                .is_some_and(|edge| edge.source == VertexId::START)),
            "wired top edge removed while the guard was alive"
        );
        unwire_tops(&mut *self.graph, &self.edges);
    }
}
