use axum::{extract::State, Json};
use chrono::Utc;

use crate::analytics::goal::{project_goal, GoalProjection};
use crate::analytics::stats::{compute_stats, weekly_stats};
use crate::error::AppResult;
use crate::models::stats::{ProgressStats, WeeklyStats};
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<ProgressStats>> {
    let entries = state.store.snapshot().await;
    let today = Utc::now().date_naive();
    Ok(Json(compute_stats(&entries, today)))
}

pub async fn get_weekly_stats(State(state): State<AppState>) -> AppResult<Json<WeeklyStats>> {
    let entries = state.store.snapshot().await;
    let today = Utc::now().date_naive();
    Ok(Json(weekly_stats(&entries, today)))
}

/// Pace projection for the configured goal window.
pub async fn get_goal(State(state): State<AppState>) -> AppResult<Json<GoalProjection>> {
    let entries = state.store.snapshot().await;
    let today = Utc::now().date_naive();
    let stats = compute_stats(&entries, today);
    Ok(Json(project_goal(
        stats.total_problems,
        &state.config.goal,
        today,
    )))
}
