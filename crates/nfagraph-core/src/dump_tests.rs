use std::collections::BTreeSet;

use crate::{CharReach, NfaGraph, VertexId, VertexProps};

#[test]
fn dump_default_graph() {
    let g = NfaGraph::new();

    insta::assert_snapshot!(g.dump(), @r"
    start → startDs
    startDs → startDs
    accept → acceptEod
    acceptEod → ∅
    ");
}

#[test]
fn dump_plain_vertices_with_reports_and_tops() {
    let mut g = NfaGraph::new();
    let a = g.add_vertex(VertexProps::new(CharReach::byte(b'a')));
    let b = g.add_vertex(VertexProps::new(CharReach::range(b'0', b'9')).with_report(7));
    g.add_edge_with_top(VertexId::START, a, 1);
    g.add_edge(a, b);
    g.add_edge(b, VertexId::ACCEPT);

    insta::assert_snapshot!(g.dump(), @r"
    start → startDs, N4@1
    startDs → startDs
    accept → acceptEod
    acceptEod → ∅
    N4: a → N5
    N5: [0-9] {7} → accept
    ");
}

#[test]
fn dump_marks_vertices() {
    let g = NfaGraph::new();
    let marked: BTreeSet<_> = [VertexId::START_DS].into_iter().collect();

    insta::assert_snapshot!(g.printer().with_marked(&marked).dump(), @r"
    start → startDs
    ✗ startDs → startDs
    accept → acceptEod
    acceptEod → ∅
    ");
}
