//! Contribution-heatmap bucketing.
//!
//! Turns sparse per-day activity counts into the dense, week-aligned grid
//! the renderer draws: one column per Sunday-to-Saturday week, partial
//! weeks at either end padded with `None`.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::entry::ProgressEntry;

/// One rendered heatmap cell. `level` is the intensity bucket 0..=4.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: i64,
    pub level: u8,
}

/// Per-day activity score: problems plus study hours weighted double,
/// truncated to whole points.
pub fn activity_counts(entries: &[ProgressEntry]) -> BTreeMap<NaiveDate, i64> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        let activity = entry.problems_solved + (entry.study_hours * 2.0) as i64;
        counts.insert(entry.date, activity);
    }
    counts
}

/// Intensity bucket for a day's activity count.
pub fn intensity_level(count: i64) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// Buckets the window `[today - window_days + 1, today]` into full-width
/// week columns. Every day in the window appears exactly once; cells
/// outside the window are `None`.
pub fn bucket_weeks(
    counts: &BTreeMap<NaiveDate, i64>,
    today: NaiveDate,
    window_days: i64,
) -> Vec<Vec<Option<DayCell>>> {
    let first = today - Duration::days(window_days - 1);

    let mut weeks = Vec::new();
    let mut week: Vec<Option<DayCell>> = Vec::with_capacity(7);

    // Lead-in padding up to the first day's weekday position.
    for _ in 0..first.weekday().num_days_from_sunday() {
        week.push(None);
    }

    let mut day = first;
    while day <= today {
        let count = counts.get(&day).copied().unwrap_or(0);
        week.push(Some(DayCell {
            date: day,
            count,
            level: intensity_level(count),
        }));
        if day.weekday().num_days_from_sunday() == 6 {
            weeks.push(std::mem::take(&mut week));
        }
        day += Duration::days(1);
    }

    if !week.is_empty() {
        week.resize_with(7, || None);
        weeks.push(week);
    }

    weeks
}
