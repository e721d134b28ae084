//! JSON-file-backed progress store.
//!
//! One file, `<data_dir>/progress.json`, holding an array of entries kept
//! sorted by date. Entries are keyed by `date`: writes upsert on that key,
//! so "one entry per calendar day, last write wins" is a property of the
//! store interface rather than an assumption in the callers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::entry::ProgressEntry;

#[derive(Clone)]
pub struct ProgressStore {
    path: PathBuf,
    entries: Arc<RwLock<Vec<ProgressEntry>>>,
}

impl ProgressStore {
    /// Opens the store, creating the data directory and an empty file on
    /// first use. A missing or corrupt file loads as an empty list.
    pub async fn open(data_dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("creating data dir {}", data_dir.display()))?;
        let path = data_dir.join("progress.json");

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<ProgressEntry>>(&bytes) {
                Ok(mut entries) => {
                    entries.sort_by_key(|e| e.date);
                    entries
                }
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "Unreadable progress file, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        tracing::info!(path = %path.display(), entries = entries.len(), "Progress store opened");

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// All entries, sorted by date ascending.
    pub async fn snapshot(&self) -> Vec<ProgressEntry> {
        self.entries.read().await.clone()
    }

    /// Entries within the (inclusive) optional date range.
    pub async fn list(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<ProgressEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| start.map_or(true, |s| e.date >= s))
            .filter(|e| end.map_or(true, |t| e.date <= t))
            .cloned()
            .collect()
    }

    /// Inserts or replaces the entry for its date. Returns `true` when a
    /// new entry was created, `false` when an existing one was replaced.
    pub async fn upsert(&self, entry: ProgressEntry) -> anyhow::Result<bool> {
        let mut entries = self.entries.write().await;
        let created = match entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => {
                *existing = entry;
                false
            }
            None => {
                entries.push(entry);
                entries.sort_by_key(|e| e.date);
                true
            }
        };
        self.persist(&entries).await?;
        Ok(created)
    }

    /// Removes the entry for `date`. Returns `false` if none existed.
    pub async fn delete(&self, date: NaiveDate) -> anyhow::Result<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.date != date);
        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries).await?;
        Ok(true)
    }

    async fn persist(&self, entries: &[ProgressEntry]) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(entries).context("serializing progress entries")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
