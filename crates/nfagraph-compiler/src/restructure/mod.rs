//! State numbering and late graph restructuring.
//!
//! Runs after graph construction and before automaton generation:
//!
//! ```text
//! NfaGraph → find_unused_states → number_states → drop_unused_starts → count_states
//! ```
//!
//! # Module Organization
//!
//! - `order`: topological state ordering with tops rooted at `start`
//! - `numbering`: dense state indices, state counts, dropping unused starts
//! - `pruning`: start vertices that never need a runtime state
//! - `reverse`: edge-reversed copy of a graph
//! - `wiring`: temporary `start → top` edges for single-source algorithms

mod numbering;
mod order;
mod pruning;
mod reverse;
mod wiring;

#[cfg(test)]
mod order_tests;
#[cfg(test)]
mod pruning_tests;

pub use numbering::{
    NO_STATE, NumberingOptions, StateIndex, StateMap, count_states, drop_unused_starts,
    number_states, number_states_with,
};
pub use pruning::find_unused_states;
pub use reverse::{Reversed, VertexMap, reverse_holder};
pub use wiring::{WiredTops, unwire_tops, wire_start_to_tops};
