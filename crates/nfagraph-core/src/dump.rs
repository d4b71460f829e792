//! Dump helpers for graph inspection and testing.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::{NfaGraph, VertexId};

/// Printer for `NfaGraph` with configurable output options.
pub struct GraphPrinter<'a> {
    graph: &'a NfaGraph,
    marked: Option<&'a BTreeSet<VertexId>>,
}

impl<'a> GraphPrinter<'a> {
    pub fn new(graph: &'a NfaGraph) -> Self {
        Self {
            graph,
            marked: None,
        }
    }

    /// Flag vertices (e.g. unused states) with `✗` in the output.
    pub fn with_marked(mut self, marked: &'a BTreeSet<VertexId>) -> Self {
        self.marked = Some(marked);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        for v in self.graph.vertices() {
            let is_marked = self.marked.is_some_and(|m| m.contains(&v));
            if is_marked {
                write!(w, "✗ ")?;
            }

            if v.is_special() {
                write!(w, "{v}")?;
            } else {
                let props = self.graph.props(v);
                write!(w, "{v}: {}", props.reach)?;
                if !props.reports.is_empty() {
                    let reports: Vec<_> = props.reports.iter().map(|r| r.to_string()).collect();
                    write!(w, " {{{}}}", reports.join(", "))?;
                }
            }

            self.format_successors(w, v)?;
            writeln!(w)?;
        }
        Ok(())
    }

    fn format_successors(&self, w: &mut String, v: VertexId) -> std::fmt::Result {
        let succs: Vec<_> = self
            .graph
            .out_edges(v)
            .filter_map(|e| self.graph.edge(e))
            .map(|edge| match edge.top {
                0 => edge.target.to_string(),
                top => format!("{}@{}", edge.target, top),
            })
            .collect();

        if succs.is_empty() {
            write!(w, " → ∅")
        } else {
            write!(w, " → {}", succs.join(", "))
        }
    }
}

impl NfaGraph {
    /// Create a printer for this graph.
    pub fn printer(&self) -> GraphPrinter<'_> {
        GraphPrinter::new(self)
    }

    /// Dump graph in default format.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
