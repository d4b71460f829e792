//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::holder::VertexSlot;
use crate::{Edge, EdgeId, NfaGraph, VertexId};

impl NfaGraph {
    pub(crate) fn ensure_vertex(&self, v: VertexId) -> &VertexSlot {
        self.vertex_slot(v).unwrap_or_else(|| {
            panic!(
                "NfaGraph: vertex {v} not found \
                 (handle must come from this graph)"
            )
        })
    }

    pub(crate) fn ensure_edge(&self, e: EdgeId) -> &Edge {
        self.edge(e).unwrap_or_else(|| {
            panic!(
                "NfaGraph: edge {e} not found \
                 (adjacency lists must only hold live edges)"
            )
        })
    }
}
