//! Topological state ordering.
//!
//! Tops are treated as extra successors of `start`, appended after its real
//! edges in top-ID order, which is the order `wire_start_to_tops` would add
//! them. This gives multi-top graphs a single traversal root without
//! touching the graph.
//!
//! Back edges (into a vertex still on the DFS stack, self-loops included) are
//! ignored, so the reverse postorder is a topological order of what remains.

use nfagraph_core::{NfaGraph, Tops, VertexId};

use super::pruning::unused_starts;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct Frame {
    vertex: VertexId,
    succs: Vec<VertexId>,
    next: usize,
}

fn successors(g: &NfaGraph, v: VertexId, tops: &Tops) -> Vec<VertexId> {
    let mut succs: Vec<VertexId> = g.successors(v).collect();
    if v == VertexId::START {
        succs.extend(tops.values().copied());
    }
    succs
}

/// Topological order of every vertex in `g`, ignoring back edges.
///
/// The DFS is rooted at `start`, then `startDs`, then any vertex not yet
/// reached, in handle order.
pub(crate) fn topo_order(g: &NfaGraph, tops: &Tops) -> Vec<VertexId> {
    let mut color = vec![Color::White; g.num_vertices()];
    let mut postorder = Vec::with_capacity(g.num_vertices());

    let roots = [VertexId::START, VertexId::START_DS]
        .into_iter()
        .chain(g.vertices());

    for root in roots {
        if color[root.index()] != Color::White {
            continue;
        }
        color[root.index()] = Color::Gray;
        let mut stack = vec![Frame {
            vertex: root,
            succs: successors(g, root, tops),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(&w) = frame.succs.get(frame.next) {
                frame.next += 1;
                if color[w.index()] == Color::White {
                    color[w.index()] = Color::Gray;
                    stack.push(Frame {
                        vertex: w,
                        succs: successors(g, w, tops),
                        next: 0,
                    });
                }
            } else {
                color[frame.vertex.index()] = Color::Black;
                postorder.push(frame.vertex);
                stack.pop();
            }
        }
    }

    postorder.reverse();
    postorder
}

/// Vertices that take a state, in numbering order.
///
/// `start` and `startDs` come first, unless they are unused; accepts never
/// take a state.
pub(crate) fn state_ordering(g: &NfaGraph, tops: &Tops) -> Vec<VertexId> {
    let unused = unused_starts(g, tops);
    let mut ordering: Vec<_> = [VertexId::START, VertexId::START_DS]
        .into_iter()
        .filter(|v| !unused.contains(v))
        .collect();
    ordering.extend(
        topo_order(g, tops)
            .into_iter()
            .filter(|v| !v.is_any_start() && !v.is_any_accept()),
    );
    ordering
}
