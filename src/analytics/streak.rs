//! Streak counting over entry dates.

use chrono::{Duration, NaiveDate};

/// Returns `(current_streak, longest_streak)`.
///
/// The current streak counts consecutive calendar days ending at the most
/// recent entry, but only while that run still reaches yesterday: a
/// missing entry for today does not break the streak as long as yesterday
/// has one. A gap of two or more days anywhere ends the run.
pub fn streaks(dates: &[NaiveDate], today: NaiveDate) -> (i64, i64) {
    if dates.is_empty() {
        return (0, 0);
    }

    let mut dates = dates.to_vec();
    dates.sort();
    dates.dedup();

    let yesterday = today - Duration::days(1);

    let mut current = 0i64;
    let mut longest = 0i64;
    let mut run = 1i64;

    if *dates.last().unwrap() >= yesterday {
        current = 1;
    }

    for pair in dates.windows(2) {
        let diff = (pair[1] - pair[0]).num_days();
        if diff == 1 {
            run += 1;
            if pair[1] >= yesterday {
                current = run;
            }
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run);

    (current, longest)
}
