use super::average::round2;
use crate::models::Entry;
use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// One calendar-day aggregation of entries inside the lookback window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub average_wellbeing: f64,
    pub count: usize,
}

/// Well-being trend over the last `days` days, ending now.
pub fn wellbeing_trend(entries: &[Entry], days: i64) -> Vec<TrendPoint> {
    wellbeing_trend_at(entries, days, Local::now())
}

/// Same as [`wellbeing_trend`] with a caller-supplied reference instant.
///
/// Entries strictly after `now - days` are bucketed by their local calendar
/// day. Days with no entries are omitted, not zero-filled. Output is
/// ascending by date.
pub fn wellbeing_trend_at(entries: &[Entry], days: i64, now: DateTime<Local>) -> Vec<TrendPoint> {
    let cutoff = now - Duration::days(days);

    // BTreeMap keeps the day buckets chronologically sorted.
    let mut buckets: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();
    for entry in entries {
        if entry.timestamp <= cutoff {
            continue;
        }
        let day = entry.timestamp.date_naive();
        let bucket = buckets.entry(day).or_insert((0, 0));
        bucket.0 += entry.score_or_zero();
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (sum, count))| TrendPoint {
            date,
            average_wellbeing: round2(sum as f64 / count as f64),
            count,
        })
        .collect()
}
