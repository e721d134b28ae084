//! End-to-end tests over the router, one request at a time.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use growthdash_api::analytics::goal::Goal;
use growthdash_api::config::Config;
use growthdash_api::store::ProgressStore;
use growthdash_api::{app, AppState};

async fn test_app(dir: &TempDir) -> Router {
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
        data_dir: dir.path().to_path_buf(),
        goal: Goal {
            target: 100,
            start: Utc::now().date_naive() - Duration::days(30),
            end: Utc::now().date_naive() + Duration::days(60),
        },
    };
    let store = ProgressStore::open(dir.path()).await.unwrap();
    app(AppState {
        store,
        config: Arc::new(config),
    })
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn entry_body(date: NaiveDate) -> Value {
    json!({
        "date": date.to_string(),
        "problems_solved": 3,
        "problems": [
            {"name": "Two Sum", "difficulty": "easy", "topic": "arrays"},
            {"name": "Valid Anagram", "difficulty": "easy", "topic": "hash-table"},
            {"name": "3Sum", "difficulty": "medium", "topic": "two-pointers"},
        ],
        "study_hours": 2.5,
        "notes": "Great progress today!",
        "mood": "great",
    })
}

#[tokio::test]
async fn health_reports_service_and_version() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "growthdash-api");
}

#[tokio::test]
async fn upsert_then_list_round_trips() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let today = Utc::now().date_naive();

    let (status, body) = post_json(&app, "/api/progress", entry_body(today)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Progress entry added");
    assert_eq!(body["entry"]["problems_solved"], 3);

    let (status, body) = get_json(&app, "/api/progress").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], today.to_string());
}

#[tokio::test]
async fn same_date_upsert_replaces_the_entry() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let today = Utc::now().date_naive();

    post_json(&app, "/api/progress", entry_body(today)).await;

    let mut replacement = entry_body(today);
    replacement["problems_solved"] = json!(1);
    replacement["problems"] = json!([
        {"name": "LRU Cache", "difficulty": "hard", "topic": "linked-list"},
    ]);
    let (status, body) = post_json(&app, "/api/progress", replacement).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Progress entry updated");

    let (_, body) = get_json(&app, "/api/progress").await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["problems_solved"], 1);
}

#[tokio::test]
async fn list_filters_by_date_range() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let today = Utc::now().date_naive();

    post_json(&app, "/api/progress", entry_body(today)).await;
    post_json(&app, "/api/progress", entry_body(today - Duration::days(10))).await;

    let uri = format!("/api/progress?start_date={}", today - Duration::days(3));
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_difficulty_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let body = json!({
        "date": Utc::now().date_naive().to_string(),
        "problems": [{"name": "Test", "difficulty": "invalid", "topic": "test"}],
    });
    let (status, _) = post_json(&app, "/api/progress", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn negative_study_hours_are_rejected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let mut body = entry_body(Utc::now().date_naive());
    body["study_hours"] = json!(-1.0);
    let (status, _) = post_json(&app, "/api/progress", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_removes_and_404s_when_absent() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let today = Utc::now().date_naive();

    post_json(&app, "/api/progress", entry_body(today)).await;

    let delete = |uri: String| {
        let app = app.clone();
        async move {
            app.oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
        }
    };

    assert_eq!(delete(format!("/api/progress/{today}")).await, StatusCode::OK);
    assert_eq!(
        delete(format!("/api/progress/{today}")).await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn stats_are_consistent_with_progress() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let today = Utc::now().date_naive();

    post_json(&app, "/api/progress", entry_body(today)).await;
    post_json(&app, "/api/progress", entry_body(today - Duration::days(1))).await;

    let (status, stats) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_problems"], 6);
    assert_eq!(stats["easy_count"], 4);
    assert_eq!(stats["medium_count"], 2);
    assert_eq!(stats["hard_count"], 0);
    assert_eq!(stats["days_active"], 2);
    assert_eq!(stats["current_streak"], 2);
    assert!((stats["total_study_hours"].as_f64().unwrap() - 5.0).abs() < 1e-9);
    assert_eq!(
        stats["topics_covered"],
        json!(["arrays", "hash-table", "two-pointers"])
    );
}

#[tokio::test]
async fn weekly_stats_have_the_expected_shape() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    post_json(&app, "/api/progress", entry_body(Utc::now().date_naive())).await;

    let (status, weekly) = get_json(&app, "/api/stats/weekly").await;
    assert_eq!(status, StatusCode::OK);
    assert!(weekly["period"].is_string());
    assert_eq!(weekly["total_problems"], 3);
    assert_eq!(weekly["days_active"], 1);
    assert!(weekly["problems_by_day"].is_object());
}

#[tokio::test]
async fn heatmap_scores_problems_and_hours() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    let today = Utc::now().date_naive();
    post_json(&app, "/api/progress", entry_body(today)).await;

    let (status, body) = get_json(&app, "/api/heatmap").await;
    assert_eq!(status, StatusCode::OK);
    // 3 problems + 2.5 hours * 2 truncated = 8
    assert_eq!(body["data"][today.to_string()], 8);
}

#[tokio::test]
async fn heatmap_weeks_grid_is_dense_and_aligned() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = get_json(&app, "/api/heatmap/weeks?window_days=30").await;
    assert_eq!(status, StatusCode::OK);
    let weeks = body["weeks"].as_array().unwrap();
    assert!(weeks.iter().all(|w| w.as_array().unwrap().len() == 7));
    let day_count: usize = weeks
        .iter()
        .flat_map(|w| w.as_array().unwrap())
        .filter(|cell| !cell.is_null())
        .count();
    assert_eq!(day_count, 30);
}

#[tokio::test]
async fn knowledge_graph_links_same_day_topics() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    post_json(&app, "/api/progress", entry_body(Utc::now().date_naive())).await;

    let (status, graph) = get_json(&app, "/api/knowledge-graph").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
    // Three topics in one day pair up three ways.
    assert_eq!(graph["edges"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn topics_cover_the_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, topics) = get_json(&app, "/api/topics").await;
    assert_eq!(status, StatusCode::OK);
    let rows = topics.as_array().unwrap();
    assert_eq!(rows.len(), 17);
    assert!(rows.iter().all(|r| r["solved"] == 0));
}

#[tokio::test]
async fn goal_projection_reflects_stored_progress() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    post_json(&app, "/api/progress", entry_body(Utc::now().date_naive())).await;

    let (status, goal) = get_json(&app, "/api/goal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(goal["days_remaining"], 60);
    assert!((goal["percent_complete"].as_f64().unwrap() - 0.03).abs() < 1e-9);
    assert!(goal["prediction"].is_string());
}

#[tokio::test]
async fn store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let today = Utc::now().date_naive();
    {
        let app = test_app(&dir).await;
        post_json(&app, "/api/progress", entry_body(today)).await;
    }

    // Fresh store over the same data dir.
    let app = test_app(&dir).await;
    let (_, body) = get_json(&app, "/api/progress").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
