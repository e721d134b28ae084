//! Typed client for the dashboard API — the fetch side of the renderer.
//!
//! Read calls degrade rather than fail: a transport error or non-2xx on
//! any GET is logged and surfaced as `None`, so one dead section never
//! blanks the rest of the dashboard. Writes propagate their error to the
//! caller, which is expected to tell the user and keep the unsent entry
//! around for a manual retry.

use reqwest::StatusCode;

use crate::models::entry::ProgressEntry;
use crate::models::graph::{HeatmapData, KnowledgeGraph};
use crate::models::stats::ProgressStats;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(StatusCode),
}

/// All four read sections, fetched jointly. Each section is independently
/// absent when its fetch failed.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub progress: Option<Vec<ProgressEntry>>,
    pub stats: Option<ProgressStats>,
    pub heatmap: Option<HeatmapData>,
    pub knowledge_graph: Option<KnowledgeGraph>,
}

#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Issues the four reads concurrently and waits for all of them.
    pub async fn fetch_dashboard(&self) -> DashboardData {
        let (progress, stats, heatmap, knowledge_graph) = tokio::join!(
            self.get_progress(),
            self.get_stats(),
            self.get_heatmap(),
            self.get_knowledge_graph(),
        );
        DashboardData {
            progress,
            stats,
            heatmap,
            knowledge_graph,
        }
    }

    pub async fn get_progress(&self) -> Option<Vec<ProgressEntry>> {
        self.get_degraded("/api/progress").await
    }

    pub async fn get_stats(&self) -> Option<ProgressStats> {
        self.get_degraded("/api/stats").await
    }

    pub async fn get_heatmap(&self) -> Option<HeatmapData> {
        self.get_degraded("/api/heatmap").await
    }

    pub async fn get_knowledge_graph(&self) -> Option<KnowledgeGraph> {
        self.get_degraded("/api/knowledge-graph").await
    }

    /// POST /api/progress. Unlike the reads, failures propagate.
    pub async fn post_entry(&self, entry: &ProgressEntry) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}/api/progress", self.base_url))
            .json(entry)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(())
    }

    async fn get_degraded<T: serde::de::DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.get(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path, error = %e, "Dashboard fetch failed, section degrades to empty");
                None
            }
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
