//! The analytics engine: pure derivations over already-fetched entries.
//!
//! Nothing here touches the store, the clock, or the network. Callers pass
//! `today` explicitly, so every function is a deterministic map from its
//! inputs to its output.

pub mod goal;
pub mod graph;
pub mod heatmap;
pub mod stats;
pub mod streak;
pub mod topics;
