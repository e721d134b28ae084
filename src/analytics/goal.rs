//! Goal-pace projection.
//!
//! Pure arithmetic over the configured goal window and the current solved
//! total; wall-clock time enters only through the explicit `today`
//! parameter so callers (and tests) control it.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A fixed problem-count goal over a date window. `target` is positive and
/// `start <= end`; both are enforced at config load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub target: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Prediction {
    Complete,
    OnTrack,
    Behind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProjection {
    pub days_remaining: i64,
    /// Problems per day needed to land exactly on `end`. `None` once the
    /// window has closed (rendered as an em-dash client-side).
    pub daily_pace_needed: Option<f64>,
    /// Problems per day since `start`, rounded to one decimal for display.
    pub current_pace: f64,
    pub prediction: Prediction,
    pub percent_complete: f64,
}

/// Projects whether the goal will be met at the current pace.
pub fn project_goal(current_solved: i64, goal: &Goal, today: NaiveDate) -> GoalProjection {
    // Floored at 1: before the window opens there is no elapsed time to
    // divide by.
    let days_elapsed = (today - goal.start).num_days().max(1);
    let days_remaining = (goal.end - today).num_days().max(0);
    let remaining = (goal.target - current_solved).max(0);

    let daily_pace_needed = if days_remaining > 0 {
        Some(remaining as f64 / days_remaining as f64)
    } else {
        None
    };

    // Unrounded pace drives the prediction; the rounded value is display
    // only.
    let pace = current_solved as f64 / days_elapsed as f64;

    let prediction = if current_solved >= goal.target {
        Prediction::Complete
    } else if pace > 0.0 && projected_finish(remaining, pace, today) <= goal.end {
        Prediction::OnTrack
    } else {
        Prediction::Behind
    };

    GoalProjection {
        days_remaining,
        daily_pace_needed,
        current_pace: (pace * 10.0).round() / 10.0,
        prediction,
        percent_complete: (current_solved as f64 / goal.target as f64).min(1.0),
    }
}

fn projected_finish(remaining: i64, pace: f64, today: NaiveDate) -> NaiveDate {
    let days_to_finish = (remaining as f64 / pace).ceil() as i64;
    today + Duration::days(days_to_finish)
}
