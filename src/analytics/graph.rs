//! Knowledge-graph construction from the entry list.
//!
//! Nodes are topics weighted by solved-problem volume and difficulty mix;
//! edges connect topics that were studied on the same day.

use std::collections::BTreeMap;

use crate::models::entry::{Difficulty, ProgressEntry};
use crate::models::graph::{KnowledgeEdge, KnowledgeGraph, KnowledgeNode};

/// Problems per topic at which mastery saturates.
const MASTERY_SATURATION: f64 = 10.0;
/// Co-occurrence count at which edge strength saturates.
const EDGE_SATURATION: f64 = 5.0;

pub fn build_graph(entries: &[ProgressEntry]) -> KnowledgeGraph {
    // Per-topic solved count and hard count. BTreeMap keeps node order
    // stable across runs.
    let mut topic_stats: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for entry in entries {
        for problem in &entry.problems {
            let stats = topic_stats.entry(problem.topic.as_str()).or_default();
            stats.0 += 1;
            if problem.difficulty == Difficulty::Hard {
                stats.1 += 1;
            }
        }
    }

    let nodes = topic_stats
        .iter()
        .map(|(&topic, &(count, hard))| {
            let base = (count as f64 / MASTERY_SATURATION).min(1.0);
            let hard_ratio = hard as f64 / count as f64;
            KnowledgeNode {
                id: topic.to_string(),
                label: title_case(topic),
                category: "topic".to_string(),
                mastery: (base + hard_ratio * 0.3).min(1.0),
                problems_solved: count,
            }
        })
        .collect();

    // Topics appearing in the same day's entry are considered related.
    let mut pair_counts: BTreeMap<(String, String), i64> = BTreeMap::new();
    for entry in entries {
        let mut topics: Vec<&str> = entry.problems.iter().map(|p| p.topic.as_str()).collect();
        topics.sort();
        topics.dedup();
        for (i, &a) in topics.iter().enumerate() {
            for &b in &topics[i + 1..] {
                *pair_counts.entry((a.to_string(), b.to_string())).or_default() += 1;
            }
        }
    }

    let edges = pair_counts
        .into_iter()
        .map(|((source, target), count)| KnowledgeEdge {
            source,
            target,
            strength: (count as f64 / EDGE_SATURATION).min(1.0),
        })
        .collect();

    KnowledgeGraph { nodes, edges }
}

/// "two-pointers" -> "Two Pointers".
fn title_case(topic: &str) -> String {
    topic
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
