//! Aggregate statistics over the entry list.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};

use crate::analytics::streak::streaks;
use crate::models::entry::{Difficulty, ProgressEntry};
use crate::models::stats::{ProgressStats, WeeklyStats};

/// Full stats rollup: totals, difficulty split, topic set, streaks.
pub fn compute_stats(entries: &[ProgressEntry], today: NaiveDate) -> ProgressStats {
    let mut total_problems = 0i64;
    let mut easy_count = 0i64;
    let mut medium_count = 0i64;
    let mut hard_count = 0i64;
    let mut total_study_hours = 0.0f64;
    let mut topics = BTreeSet::new();
    let mut dates = Vec::with_capacity(entries.len());

    for entry in entries {
        total_problems += entry.problems_solved;
        total_study_hours += entry.study_hours;
        dates.push(entry.date);

        for problem in &entry.problems {
            match problem.difficulty {
                Difficulty::Easy => easy_count += 1,
                Difficulty::Medium => medium_count += 1,
                Difficulty::Hard => hard_count += 1,
            }
            if !problem.topic.is_empty() {
                topics.insert(problem.topic.clone());
            }
        }
    }

    let (current_streak, longest_streak) = streaks(&dates, today);

    let days_active = dates.iter().collect::<BTreeSet<_>>().len() as i64;
    let avg = if days_active > 0 {
        total_problems as f64 / days_active as f64
    } else {
        0.0
    };

    ProgressStats {
        total_problems,
        easy_count,
        medium_count,
        hard_count,
        total_study_hours,
        current_streak,
        longest_streak,
        topics_covered: topics.into_iter().collect(),
        avg_problems_per_day: (avg * 100.0).round() / 100.0,
        days_active,
    }
}

/// Summary of the trailing seven days.
pub fn weekly_stats(entries: &[ProgressEntry], today: NaiveDate) -> WeeklyStats {
    let week_ago = today - Duration::days(7);

    let mut problems_by_day = BTreeMap::new();
    let mut total_problems = 0i64;
    let mut total_hours = 0.0f64;
    let mut days_active = 0i64;

    for entry in entries.iter().filter(|e| e.date >= week_ago) {
        problems_by_day.insert(entry.date, entry.problems_solved);
        total_problems += entry.problems_solved;
        total_hours += entry.study_hours;
        days_active += 1;
    }

    WeeklyStats {
        period: format!("{} to {}", week_ago, today),
        problems_by_day,
        total_problems,
        total_hours,
        days_active,
    }
}
