use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated progress statistics, computed fresh from the entry list on
/// every GET /api/stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_problems: i64,
    pub easy_count: i64,
    pub medium_count: i64,
    pub hard_count: i64,
    pub total_study_hours: f64,
    pub current_streak: i64,
    pub longest_streak: i64,
    /// Sorted ascending for stable output.
    pub topics_covered: Vec<String>,
    pub avg_problems_per_day: f64,
    pub days_active: i64,
}

/// Rolling 7-day summary for GET /api/stats/weekly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub period: String,
    pub problems_by_day: BTreeMap<NaiveDate, i64>,
    pub total_problems: i64,
    pub total_hours: f64,
    pub days_active: i64,
}
