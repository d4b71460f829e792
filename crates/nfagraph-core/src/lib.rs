#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for NFA graphs.
//!
//! An `NfaGraph` is an arena of vertices addressed by `VertexId` handles, with
//! edges stored once and referenced from per-vertex adjacency lists by `EdgeId`.
//! Every graph owns four special vertices at fixed handles:
//!
//! ```text
//! start ──→ startDs ─┐      accept ──→ acceptEod
//!             ↑──────┘
//! ```
//!
//! Plain vertices are appended after the specials in creation order.

use std::collections::BTreeMap;
use std::fmt;

mod dump;
mod holder;
mod invariants;
mod reach;

#[cfg(test)]
mod dump_tests;

pub use dump::GraphPrinter;
pub use holder::{Edge, NfaGraph, VertexProps};
pub use reach::CharReach;

/// Identifier of a top: an alternate entry point triggered from `start`.
pub type TopId = u32;

/// Identifier of a report raised when a match is found.
pub type ReportId = u32;

/// Top ID → vertex entered when that top fires. Iterates in top-ID order.
pub type Tops = BTreeMap<TopId, VertexId>;

/// Stable handle to a vertex in an `NfaGraph`.
///
/// Handles are dense and never reused within one graph. Ordering follows
/// creation order, so the specials sort before every plain vertex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub const START: Self = Self(0);
    pub const START_DS: Self = Self(1);
    pub const ACCEPT: Self = Self(2);
    pub const ACCEPT_EOD: Self = Self(3);

    /// Number of special vertices every graph carries.
    pub const N_SPECIALS: u32 = 4;

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create a handle from a raw index. Use only for deserialization and tests.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The special role of this handle, if any.
    pub fn special(self) -> Option<Special> {
        match self {
            Self::START => Some(Special::Start),
            Self::START_DS => Some(Special::StartDotStar),
            Self::ACCEPT => Some(Special::Accept),
            Self::ACCEPT_EOD => Some(Special::AcceptEod),
            _ => None,
        }
    }

    pub fn is_special(self) -> bool {
        self.0 < Self::N_SPECIALS
    }

    pub fn is_any_start(self) -> bool {
        self == Self::START || self == Self::START_DS
    }

    pub fn is_any_accept(self) -> bool {
        self == Self::ACCEPT || self == Self::ACCEPT_EOD
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special() {
            Some(special) => write!(f, "{special}"),
            None => write!(f, "N{}", self.0),
        }
    }
}

/// Stable handle to an edge in an `NfaGraph`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Role of a special vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Special {
    /// Anchored start: only active at offset zero.
    Start,
    /// Floating start: a self-looping start active at every offset.
    StartDotStar,
    /// Reports a match at the current offset.
    Accept,
    /// Reports a match only at end of data.
    AcceptEod,
}

impl Special {
    pub fn vertex(self) -> VertexId {
        match self {
            Self::Start => VertexId::START,
            Self::StartDotStar => VertexId::START_DS,
            Self::Accept => VertexId::ACCEPT,
            Self::AcceptEod => VertexId::ACCEPT_EOD,
        }
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::StartDotStar => "startDs",
            Self::Accept => "accept",
            Self::AcceptEod => "acceptEod",
        };
        f.write_str(name)
    }
}
