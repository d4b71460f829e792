use nfagraph_core::{NfaGraph, Tops, VertexId};

use super::order::{state_ordering, topo_order};
use crate::test_utils::{chain, vertex};

const START: VertexId = VertexId::START;
const START_DS: VertexId = VertexId::START_DS;
const ACCEPT: VertexId = VertexId::ACCEPT;
const ACCEPT_EOD: VertexId = VertexId::ACCEPT_EOD;

#[test]
fn topo_order_of_default_graph() {
    let g = NfaGraph::new();

    assert_eq!(
        topo_order(&g, &Tops::new()),
        vec![ACCEPT, ACCEPT_EOD, START, START_DS]
    );
}

#[test]
fn topo_order_respects_forward_edges() {
    let mut g = NfaGraph::new();
    let vs = chain(&mut g, b"abc");
    g.add_edge(START, vs[0]);
    g.add_edge(vs[0], vs[2]);
    g.add_edge(vs[2], ACCEPT);

    let order = topo_order(&g, &Tops::new());
    let pos = |v: VertexId| order.iter().position(|&o| o == v).unwrap();

    for (_, e) in g.edges() {
        if e.source != e.target {
            assert!(pos(e.source) < pos(e.target), "{} before {}", e.source, e.target);
        }
    }
}

#[test]
fn back_edges_are_ignored() {
    let mut g = NfaGraph::new();
    let vs = chain(&mut g, b"ab");
    g.add_edge(START, vs[0]);
    g.add_edge(vs[1], vs[0]);
    g.add_edge(vs[1], ACCEPT);

    assert_eq!(
        topo_order(&g, &Tops::new()),
        vec![START, vs[0], vs[1], ACCEPT, ACCEPT_EOD, START_DS]
    );
}

#[test]
fn state_ordering_puts_starts_first_and_skips_accepts() {
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    g.add_edge(START, a);
    g.add_edge(START_DS, a);
    g.add_edge(a, ACCEPT);
    g.add_edge(a, ACCEPT_EOD);

    assert_eq!(state_ordering(&g, &Tops::new()), vec![START, START_DS, a]);
}

#[test]
fn state_ordering_skips_unused_starts() {
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    g.add_edge(START_DS, a);
    g.add_edge(a, ACCEPT);

    assert_eq!(state_ordering(&g, &Tops::new()), vec![START_DS, a]);
    assert_eq!(state_ordering(&NfaGraph::new(), &Tops::new()), vec![]);
}

#[test]
fn top_makes_start_used() {
    let mut g = NfaGraph::new();
    let t = vertex(&mut g, b't');
    g.add_edge(t, ACCEPT);

    assert_eq!(state_ordering(&g, &Tops::new()), vec![t]);
    assert_eq!(state_ordering(&g, &Tops::from([(1, t)])), vec![START, t]);
}

#[test]
fn tops_follow_real_start_edges() {
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    let t = vertex(&mut g, b't');
    g.add_edge(START, a);
    g.add_edge(a, ACCEPT);
    g.add_edge(t, ACCEPT);

    let ordering = state_ordering(&g, &Tops::from([(0, t)]));

    assert_eq!(ordering, vec![START, t, a]);
}
