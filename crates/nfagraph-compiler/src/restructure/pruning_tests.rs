use std::collections::BTreeSet;

use nfagraph_core::{NfaGraph, Tops, VertexId};

use super::pruning::find_unused_states;
use super::wiring::{unwire_tops, wire_start_to_tops};
use crate::test_utils::vertex;

#[test]
fn default_graph_starts_are_unused() {
    let g = NfaGraph::new();

    let unused = find_unused_states(&g);

    assert_eq!(
        unused,
        BTreeSet::from([VertexId::START, VertexId::START_DS])
    );
}

#[test]
fn start_with_only_start_edges_is_unused() {
    // start → startDs and the startDs self-loop are real out-edges
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    g.add_edge(a, VertexId::ACCEPT);

    assert_eq!(g.out_degree(VertexId::START), 1);
    assert_eq!(g.out_degree(VertexId::START_DS), 1);
    assert_eq!(
        find_unused_states(&g),
        BTreeSet::from([VertexId::START, VertexId::START_DS])
    );
}

#[test]
fn start_without_out_edges_is_unused() {
    let mut g = NfaGraph::bare();
    let a = vertex(&mut g, b'a');
    g.add_edge(VertexId::START_DS, a);

    assert_eq!(find_unused_states(&g), BTreeSet::from([VertexId::START]));
}

#[test]
fn start_with_plain_successor_is_used() {
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    g.add_edge(VertexId::START, a);

    assert!(!find_unused_states(&g).contains(&VertexId::START));
}

#[test]
fn start_reaching_accept_directly_is_used() {
    // Empty pattern: start → accept.
    let mut g = NfaGraph::new();
    g.add_edge(VertexId::START, VertexId::ACCEPT);

    assert_eq!(find_unused_states(&g), BTreeSet::from([VertexId::START_DS]));
}

#[test]
fn result_tracks_edge_changes() {
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    g.add_edge(a, VertexId::ACCEPT);
    let tops = Tops::from([(0, a)]);

    let mut added = Vec::new();
    wire_start_to_tops(&mut g, &tops, &mut added).unwrap();
    assert!(!find_unused_states(&g).contains(&VertexId::START));

    unwire_tops(&mut g, &added);
    assert!(find_unused_states(&g).contains(&VertexId::START));
}

#[test]
fn dump_marks_unused_starts() {
    let mut g = NfaGraph::new();
    let a = vertex(&mut g, b'a');
    g.add_edge(VertexId::START_DS, a);
    g.add_edge(a, VertexId::ACCEPT);

    let unused = find_unused_states(&g);

    insta::assert_snapshot!(g.printer().with_marked(&unused).dump(), @r"
    ✗ start → startDs
    startDs → startDs, N4
    accept → acceptEod
    acceptEod → ∅
    N4: a → accept
    ");
}
