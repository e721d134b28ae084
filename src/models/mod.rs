pub mod entry;
pub mod graph;
pub mod stats;
