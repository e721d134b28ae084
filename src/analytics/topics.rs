//! Topic-mastery progress against the fixed study plan.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::graph::KnowledgeNode;

/// The study plan: every topic the dashboard tracks, with the problem
/// count considered "done" for that topic.
pub const TOPIC_CATALOG: [(&str, &str, i64); 17] = [
    ("arrays", "Arrays & Hashing", 20),
    ("strings", "Strings", 15),
    ("hash-table", "Hash Table", 12),
    ("two-pointers", "Two Pointers", 10),
    ("sliding-window", "Sliding Window", 10),
    ("stack", "Stack", 10),
    ("queue", "Queue", 8),
    ("linked-list", "Linked List", 12),
    ("binary-search", "Binary Search", 10),
    ("trees", "Trees", 18),
    ("tries", "Tries", 6),
    ("heap", "Heap / Priority Queue", 8),
    ("graphs", "Graphs", 15),
    ("backtracking", "Backtracking", 10),
    ("dynamic-programming", "Dynamic Programming", 20),
    ("greedy", "Greedy", 10),
    ("intervals", "Intervals", 8),
];

#[derive(Debug, Clone, Serialize)]
pub struct TopicProgress {
    pub id: String,
    pub label: String,
    pub solved: i64,
    pub target: i64,
    /// 0..=100, capped even when solved overshoots the target.
    pub percent: f64,
    /// Display tier 1..=4 at the 25/50/75 percent thresholds.
    pub level: u8,
}

/// Progress for every catalog topic, whether or not the knowledge graph
/// has recorded activity for it. Sorted by solved count descending;
/// catalog order breaks ties.
pub fn topic_progress(nodes: &[KnowledgeNode]) -> Vec<TopicProgress> {
    let solved_by_id: HashMap<&str, i64> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.problems_solved))
        .collect();

    let mut rows: Vec<TopicProgress> = TOPIC_CATALOG
        .iter()
        .map(|&(id, label, target)| {
            let solved = solved_by_id.get(id).copied().unwrap_or(0);
            let percent = (solved as f64 / target as f64).min(1.0) * 100.0;
            TopicProgress {
                id: id.to_string(),
                label: label.to_string(),
                solved,
                target,
                percent,
                level: tier(percent),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.solved.cmp(&a.solved));
    rows
}

fn tier(percent: f64) -> u8 {
    if percent >= 75.0 {
        4
    } else if percent >= 50.0 {
        3
    } else if percent >= 25.0 {
        2
    } else {
        1
    }
}
