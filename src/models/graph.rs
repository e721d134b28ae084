use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A topic node in the knowledge graph. `mastery` is a [0, 1] score
/// derived from solved-problem volume and difficulty mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: String,
    pub label: String,
    pub category: String,
    pub mastery: f64,
    pub problems_solved: i64,
}

/// An edge between two topics that appeared in the same day's entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEdge {
    pub source: String,
    pub target: String,
    pub strength: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub nodes: Vec<KnowledgeNode>,
    pub edges: Vec<KnowledgeEdge>,
}

/// Sparse per-date activity counts for the contribution heatmap. Keys are
/// ISO `YYYY-MM-DD` strings; days with no activity are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapData {
    pub data: BTreeMap<String, i64>,
}
