pub mod graph;
pub mod health;
pub mod heatmap;
pub mod progress;
pub mod stats;
