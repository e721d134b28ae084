use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::analytics::heatmap::{activity_counts, bucket_weeks, DayCell};
use crate::error::AppResult;
use crate::models::graph::HeatmapData;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WeeksQuery {
    pub window_days: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HeatmapWeeks {
    pub weeks: Vec<Vec<Option<DayCell>>>,
}

/// Sparse per-day activity counts, keyed by ISO date string.
pub async fn get_heatmap(State(state): State<AppState>) -> AppResult<Json<HeatmapData>> {
    let entries = state.store.snapshot().await;
    let data = activity_counts(&entries)
        .into_iter()
        .map(|(date, count)| (date.to_string(), count))
        .collect();
    Ok(Json(HeatmapData { data }))
}

/// Dense week-aligned grid ready for the contribution renderer.
pub async fn get_heatmap_weeks(
    State(state): State<AppState>,
    Query(query): Query<WeeksQuery>,
) -> AppResult<Json<HeatmapWeeks>> {
    let window_days = query.window_days.unwrap_or(365).clamp(7, 366);
    let entries = state.store.snapshot().await;
    let today = Utc::now().date_naive();
    let weeks = bucket_weeks(&activity_counts(&entries), today, window_days);
    Ok(Json(HeatmapWeeks { weeks }))
}
