use axum::{extract::State, Json};

use crate::analytics::graph::build_graph;
use crate::analytics::topics::{topic_progress, TopicProgress};
use crate::error::AppResult;
use crate::models::graph::KnowledgeGraph;
use crate::AppState;

pub async fn get_knowledge_graph(State(state): State<AppState>) -> AppResult<Json<KnowledgeGraph>> {
    let entries = state.store.snapshot().await;
    Ok(Json(build_graph(&entries)))
}

/// Per-topic progress against the fixed catalog, derived from the same
/// graph nodes the 3D view consumes.
pub async fn get_topics(State(state): State<AppState>) -> AppResult<Json<Vec<TopicProgress>>> {
    let entries = state.store.snapshot().await;
    let graph = build_graph(&entries);
    Ok(Json(topic_progress(&graph.nodes)))
}
