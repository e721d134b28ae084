use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::entry::{ProgressEntry, ProgressQuery, UpsertEntryRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UpsertResponse {
    pub message: String,
    pub entry: ProgressEntry,
}

pub async fn list_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> AppResult<Json<Vec<ProgressEntry>>> {
    let entries = state.store.list(query.start_date, query.end_date).await;
    Ok(Json(entries))
}

/// POST /api/progress — upsert by date, one entry per calendar day.
pub async fn upsert_progress(
    State(state): State<AppState>,
    Json(body): Json<UpsertEntryRequest>,
) -> AppResult<Json<UpsertResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = body.into_entry();
    let created = state.store.upsert(entry.clone()).await?;

    let message = if created {
        "Progress entry added"
    } else {
        "Progress entry updated"
    };
    tracing::info!(date = %entry.date, created, "Progress entry stored");

    Ok(Json(UpsertResponse {
        message: message.to_string(),
        entry,
    }))
}

pub async fn delete_progress(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<serde_json::Value>> {
    if !state.store.delete(date).await? {
        return Err(AppError::NotFound("Entry not found".into()));
    }
    Ok(Json(serde_json::json!({
        "message": format!("Deleted entry for {date}"),
    })))
}
