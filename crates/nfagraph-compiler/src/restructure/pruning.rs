//! Unused-state analysis.

use std::collections::BTreeSet;

use nfagraph_core::{NfaGraph, Tops, VertexId};

/// Vertices that will not participate in an implementation of `g`.
///
/// These are the start vertices with no way out: every successor (if any)
/// is itself a start. The `start → startDs` edge and the `startDs` self-loop
/// exist in every graph and do not make a start useful on their own, so a
/// start whose only out-edges are these is reported even though it has
/// out-edges. Only edges to a plain vertex or an accept count.
///
/// Purely structural; rerun after any change to the edge set.
pub fn find_unused_states(g: &NfaGraph) -> BTreeSet<VertexId> {
    unused_starts(g, &Tops::new())
}

/// `find_unused_states` with `tops` as extra successors of `start`.
pub(crate) fn unused_starts(g: &NfaGraph, tops: &Tops) -> BTreeSet<VertexId> {
    [VertexId::START, VertexId::START_DS]
        .into_iter()
        .filter(|&v| {
            let virtual_succs = tops.values().copied().filter(|_| v == VertexId::START);
            g.successors(v)
                .chain(virtual_succs)
                .all(|w| w.is_any_start())
        })
        .collect()
}
