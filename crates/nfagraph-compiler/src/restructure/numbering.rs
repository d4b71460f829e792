//! Dense state numbering.
//!
//! Every vertex that participates in an automaton implementation gets a
//! unique index in `0..k`. Accepts never take a state, and neither does a
//! start vertex that can never do anything. `drop_unused_starts` brings a map
//! back in line after edge edits leave a numbered start unused.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use indexmap::IndexMap;
use nfagraph_core::{NfaGraph, TopId, Tops, VertexId};
use tracing::{debug, trace};

use super::order::state_ordering;
use super::pruning::unused_starts;
use super::wiring::check_tops;
use crate::{Error, Result};

/// State slot of a vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StateIndex {
    State(u32),
    /// The vertex participates in the graph but needs no runtime state.
    NoState,
}

pub const NO_STATE: StateIndex = StateIndex::NoState;

impl StateIndex {
    pub fn id(self) -> Option<u32> {
        match self {
            Self::State(id) => Some(id),
            Self::NoState => None,
        }
    }

    pub fn is_assigned(self) -> bool {
        matches!(self, Self::State(_))
    }
}

impl fmt::Display for StateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(id) => write!(f, "{id}"),
            Self::NoState => f.write_str("∅"),
        }
    }
}

/// Vertex → state slot, in vertex handle order.
///
/// Also remembers the tops the map was numbered with, so counting and pruning
/// see them as successors of `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMap {
    states: IndexMap<VertexId, StateIndex>,
    tops: Tops,
}

impl StateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, v: VertexId) -> Option<StateIndex> {
        self.states.get(&v).copied()
    }

    /// Assigned state of `v`; `None` for `NO_STATE` and unknown vertices.
    pub fn state(&self, v: VertexId) -> Option<u32> {
        self.get(v)?.id()
    }

    /// Set the slot of `v`, returning the previous one.
    pub fn insert(&mut self, v: VertexId, state: StateIndex) -> Option<StateIndex> {
        self.states.insert(v, state)
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.states.contains_key(&v)
    }

    /// Tops passed to `number_states`; empty for hand-built maps.
    pub fn tops(&self) -> &Tops {
        &self.tops
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, StateIndex)> + '_ {
        self.states.iter().map(|(v, s)| (*v, *s))
    }

    /// Vertices holding a real state, ordered by state index.
    pub fn by_state(&self) -> Vec<VertexId> {
        let mut numbered: Vec<_> = self
            .iter()
            .filter_map(|(v, s)| Some((s.id()?, v)))
            .collect();
        numbered.sort_unstable();
        numbered.into_iter().map(|(_, v)| v).collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Dump the mapping, one `vertex: state` line per entry.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (v, s) in self.iter() {
            out.push_str(&format!("{v}: {s}\n"));
        }
        out
    }
}

/// Knobs for `number_states_with`.
#[derive(Debug, Clone, Copy)]
pub struct NumberingOptions {
    /// Sink a vertex whose only successor is also its predecessor next to
    /// that predecessor. Improves later state merging.
    pub tight_loops: bool,
}

impl Default for NumberingOptions {
    fn default() -> Self {
        Self { tight_loops: true }
    }
}

impl NumberingOptions {
    pub fn with_tight_loops(mut self, enabled: bool) -> Self {
        self.tight_loops = enabled;
        self
    }
}

/// Give each participating vertex a unique state index, with default options.
pub fn number_states(g: &NfaGraph, tops: &Tops) -> Result<StateMap> {
    number_states_with(g, tops, NumberingOptions::default())
}

/// Give each participating vertex a unique state index.
///
/// The result has an entry for every vertex of `g`. Accepts and unused starts
/// map to `NO_STATE`; everything else gets an index in `0..k`, assigned in
/// topological order with tops treated as successors of `start`.
pub fn number_states_with(
    g: &NfaGraph,
    tops: &Tops,
    options: NumberingOptions,
) -> Result<StateMap> {
    check_tops(g, tops)?;
    debug!(
        vertices = g.num_vertices(),
        tops = tops.len(),
        "numbering states"
    );

    let mut ordering = state_ordering(g, tops);
    if options.tight_loops {
        optimise_tight_loops(g, &mut ordering);
    }

    let mut states = assign_states(g, &ordering);
    states.tops = tops.clone();
    Ok(states)
}

/// A vertex whose single successor is also a predecessor can take any state
/// the topological order likes, so move it next to that predecessor.
fn optimise_tight_loops(g: &NfaGraph, ordering: &mut Vec<VertexId>) {
    let mut candidates = Vec::new();
    for (i, &v) in ordering.iter().enumerate() {
        if v.is_special() || g.out_degree(v) != 1 {
            continue;
        }
        let Some(t) = g.successors(v).next() else {
            continue;
        };
        if t == v || t.is_special() || !g.has_edge(t, v) {
            continue;
        }
        if ordering[..i].contains(&t) {
            candidates.push((v, t));
        }
    }

    for (v, t) in candidates {
        let position = |x: VertexId| ordering.iter().position(|&o| o == x);
        let (Some(t_pos), Some(v_pos)) = (position(t), position(v)) else {
            continue;
        };
        // Only move backwards, and only when not already adjacent.
        if t_pos >= v_pos || v_pos - t_pos == 1 {
            continue;
        }

        trace!(%v, %t, "moving vertex next to its loop predecessor");
        ordering.remove(v_pos);
        ordering.insert(t_pos + 1, v);
    }
}

fn assign_states(g: &NfaGraph, ordering: &[VertexId]) -> StateMap {
    let mut states = StateMap::new();
    for v in g.vertices() {
        states.insert(v, NO_STATE);
    }
    for (n, &v) in ordering.iter().enumerate() {
        trace!(%v, state = n, "assigning state");
        states.insert(v, StateIndex::State(n as u32));
    }
    states
}

/// Count the runtime states implied by `states`.
///
/// This is the number of distinct assigned indices. With `add_tops`, and
/// `start` numbered, a top needs a state of its own when none of the plain
/// vertices it enters holds one. Tops come from `start`'s out-edges and from
/// the tops recorded in `states`, so wiring them first changes nothing.
/// Tops entering only special vertices share the `start` slot.
pub fn count_states(g: &NfaGraph, states: &StateMap, add_tops: bool) -> Result<u32> {
    if states.is_empty() {
        return Ok(0);
    }

    let distinct: BTreeSet<u32> = states.iter().filter_map(|(_, s)| s.id()).collect();
    let mut num_states = distinct.len() as u32;

    let start = states
        .get(VertexId::START)
        .ok_or(Error::Unnumbered(VertexId::START))?;
    if add_tops && start.is_assigned() {
        let wired = g
            .out_edges(VertexId::START)
            .filter_map(|e| g.edge(e))
            .map(|e| (e.top, e.target));
        let recorded = states.tops().iter().map(|(&top, &v)| (top, v));

        let mut numbered: BTreeMap<TopId, bool> = BTreeMap::new();
        for (top, v) in wired.chain(recorded) {
            if v.is_special() {
                continue;
            }
            *numbered.entry(top).or_default() |= states.state(v).is_some();
        }
        let top_states = numbered.values().filter(|&&n| !n).count() as u32;
        trace!(top_states, "adding top states");
        num_states += top_states;
    }

    Ok(num_states)
}

/// Demote unused start vertices to `NO_STATE` and renumber the rest densely.
///
/// A fresh `number_states` result is already pruned; this catches maps that
/// went stale after edge edits. Purely an optimisation: skipping it leaves a
/// correct, larger automaton.
pub fn drop_unused_starts(g: &NfaGraph, states: &mut StateMap) -> Result<()> {
    let unused = unused_starts(g, states.tops());
    if unused.is_empty() {
        return Ok(());
    }
    if let Some(&v) = unused.iter().find(|v| !states.contains(**v)) {
        return Err(Error::Unnumbered(v));
    }

    for v in unused {
        if states.insert(v, NO_STATE).is_some_and(StateIndex::is_assigned) {
            debug!(%v, "dropping unused start");
        }
    }
    renumber_states(states);
    Ok(())
}

/// Close the gaps left by demoted states, preserving relative order.
fn renumber_states(states: &mut StateMap) {
    let mut remap: BTreeMap<u32, u32> = states
        .iter()
        .filter_map(|(_, s)| Some((s.id()?, 0)))
        .collect();
    for (new, slot) in remap.values_mut().enumerate() {
        *slot = new as u32;
    }

    for slot in states.states.values_mut() {
        if let StateIndex::State(id) = slot {
            *id = remap[&*id];
        }
    }
}
