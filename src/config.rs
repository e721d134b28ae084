use std::env;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, Utc};

use crate::analytics::goal::Goal;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// Directory holding progress.json.
    pub data_dir: PathBuf,

    /// The fixed goal window the pace tracker measures against.
    pub goal: Goal,
}

impl Config {
    pub fn from_env() -> Self {
        let today = Utc::now().date_naive();

        let goal_target: i64 = env::var("GOAL_TARGET")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("GOAL_TARGET must be a number");
        // target == 0 would make percent_complete undefined; reject at
        // startup rather than special-casing the math.
        assert!(goal_target > 0, "GOAL_TARGET must be positive");

        // Default goal window: the current calendar year.
        let goal_start = parse_date_var("GOAL_START")
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap());
        let goal_end = parse_date_var("GOAL_END")
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap());
        assert!(goal_start <= goal_end, "GOAL_START must not be after GOAL_END");

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "./data".into())
                .into(),

            goal: Goal {
                target: goal_target,
                start: goal_start,
                end: goal_end,
            },
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_date_var(name: &str) -> Option<NaiveDate> {
    env::var(name).ok().map(|v| {
        NaiveDate::parse_from_str(&v, "%Y-%m-%d")
            .unwrap_or_else(|_| panic!("{} must be YYYY-MM-DD", name))
    })
}
