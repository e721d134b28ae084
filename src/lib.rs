use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod analytics;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use config::Config;
use store::ProgressStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ProgressStore,
    pub config: Arc<Config>,
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        // Progress entries
        .route("/api/progress", get(handlers::progress::list_progress))
        .route("/api/progress", post(handlers::progress::upsert_progress))
        .route(
            "/api/progress/:date",
            delete(handlers::progress::delete_progress),
        )
        // Stats & goal pace
        .route("/api/stats", get(handlers::stats::get_stats))
        .route("/api/stats/weekly", get(handlers::stats::get_weekly_stats))
        .route("/api/goal", get(handlers::stats::get_goal))
        // Heatmap
        .route("/api/heatmap", get(handlers::heatmap::get_heatmap))
        .route(
            "/api/heatmap/weeks",
            get(handlers::heatmap::get_heatmap_weeks),
        )
        // Knowledge graph & topic progress
        .route(
            "/api/knowledge-graph",
            get(handlers::graph::get_knowledge_graph),
        )
        .route("/api/topics", get(handlers::graph::get_topics));

    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .expect("FRONTEND_URL must be a valid origin")];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}
