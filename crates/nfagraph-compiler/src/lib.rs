//! NFA graph compiler passes.
//!
//! This crate prepares an `NfaGraph` built by pattern construction for the
//! automaton generators downstream:
//! - `restructure` - state numbering, unused-start pruning, reversal and top wiring

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use nfagraph_core::{TopId, VertexId};

pub mod restructure;

#[cfg(test)]
pub mod test_utils;

pub use restructure::{
    NO_STATE, NumberingOptions, Reversed, StateIndex, StateMap, VertexMap, WiredTops,
    count_states, drop_unused_starts, find_unused_states, number_states, number_states_with,
    reverse_holder, unwire_tops, wire_start_to_tops,
};

/// Errors raised when a caller hands a pass a graph that breaks its preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A top names a vertex the graph does not contain.
    #[error("top {top} targets vertex {vertex}, which is not in the graph")]
    DanglingTop { top: TopId, vertex: VertexId },

    /// A top names `accept` or `acceptEod`, which nothing may enter from `start`.
    #[error("top {top} targets accept vertex {vertex}")]
    AcceptTop { top: TopId, vertex: VertexId },

    /// A state map lacks an entry the pass needs.
    #[error("vertex {0} has no entry in the state map")]
    Unnumbered(VertexId),
}

/// Result type for restructuring passes.
pub type Result<T> = std::result::Result<T, Error>;
