use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of nights a bucket's price is denominated for. Buckets carry a
/// 7-night-equivalent rate regardless of their actual day-count.
pub const NIGHTS_PER_WEEK: f64 = 7.0;

/// A priced time interval for one unit, maintained in the administrative
/// pricing calendar. `start`/`end` are inclusive calendar dates; sibling
/// buckets for the same unit are contiguous and non-overlapping in
/// well-formed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRateBucket {
    pub unit_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Flat rate for a full week inside this bucket.
    pub weekly_price: f64,
    #[serde(default)]
    pub season: Option<String>,
}

impl WeeklyRateBucket {
    /// Whether the given night falls inside this bucket's inclusive interval.
    pub fn contains(&self, night: NaiveDate) -> bool {
        self.start <= night && night <= self.end
    }

    /// Price of a single night inside this bucket.
    pub fn nightly_price(&self) -> f64 {
        self.weekly_price / NIGHTS_PER_WEEK
    }
}
