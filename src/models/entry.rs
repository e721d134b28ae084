use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Problem difficulty. Unknown values fail deserialization, which the
/// write path surfaces as a 422.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single solved problem inside a day's entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub difficulty: Difficulty,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One calendar day's study record. At most one entry per `date`; the
/// store upserts on that key.
///
/// `problems_solved == problems.len()` is the producer's invariant. The
/// analytics code never assumes it holds and always counts what it needs
/// from whichever field it is aggregating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub problems_solved: i64,
    #[serde(default)]
    pub problems: Vec<Problem>,
    #[serde(default)]
    pub study_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// POST /api/progress body. Same shape as `ProgressEntry`; kept separate
/// so the write path can carry validation rules.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertEntryRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub problems_solved: i64,
    #[serde(default)]
    pub problems: Vec<Problem>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "study_hours must be non-negative"))]
    pub study_hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}

impl UpsertEntryRequest {
    pub fn into_entry(self) -> ProgressEntry {
        ProgressEntry {
            date: self.date,
            problems_solved: self.problems_solved,
            problems: self.problems,
            study_hours: self.study_hours,
            notes: self.notes,
            mood: self.mood,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
