//! Aggregate statistics over a canonical record collection.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::error::{LogError, LogResult};
use crate::types::{
    AnalysisResult, ErrorCount, HourlyActivity, LevelCount, LogPeriod, LogRecord,
};

/// Number of distinct error messages reported when the caller does not choose.
pub const DEFAULT_TOP_ERRORS: usize = 5;

/// Level value selected for the top-errors table. Matched exactly.
pub const ERROR_LEVEL: &str = "ERROR";

/// Hour spans above this (one leap year) get a warning before gap-filling.
pub const LARGE_SPAN_HOURS: i64 = 24 * 366;

/// Read-only view over a non-empty record collection.
///
/// Records may arrive in any order; nothing here assumes they are sorted.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    records: &'a [LogRecord],
}

impl<'a> Analyzer<'a> {
    /// Wrap a record collection for analysis. Empty collections are rejected.
    pub fn new(records: &'a [LogRecord]) -> LogResult<Self> {
        if records.is_empty() {
            return Err(LogError::InvalidInput(
                "analysis requires a non-empty record collection".into(),
            ));
        }
        Ok(Self { records })
    }

    /// Run every aggregation and return the combined result.
    ///
    /// `top_n` bounds the number of error messages and must be positive.
    pub fn analyze(&self, top_n: usize) -> LogResult<AnalysisResult> {
        if top_n == 0 {
            return Err(LogError::InvalidInput("top_n must be at least 1".into()));
        }

        let result = AnalysisResult {
            total_records: self.total_records(),
            log_period: self.log_period(),
            level_counts: self.level_counts(),
            top_errors: self.top_errors(top_n),
            activity_by_hour: self.activity_by_hour(),
        };

        tracing::debug!(
            total = result.total_records,
            levels = result.level_counts.len(),
            error_messages = result.top_errors.len(),
            hours = result.activity_by_hour.len(),
            "analysis complete"
        );
        Ok(result)
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    /// Earliest and latest timestamps.
    pub fn log_period(&self) -> LogPeriod {
        // `new` guarantees at least one record.
        let first = self.records[0].timestamp;
        let (start, end) = self
            .records
            .iter()
            .fold((first, first), |(lo, hi), r| {
                (lo.min(r.timestamp), hi.max(r.timestamp))
            });
        LogPeriod { start, end }
    }

    pub fn level_counts(&self) -> Vec<LevelCount> {
        count_ranked(self.records.iter().map(|r| r.level.as_str()))
            .into_iter()
            .map(|(level, count)| LevelCount {
                level: level.to_string(),
                count,
            })
            .collect()
    }

    /// Most frequent ERROR messages, at most `top_n`.
    pub fn top_errors(&self, top_n: usize) -> Vec<ErrorCount> {
        let errors = self
            .records
            .iter()
            .filter(|r| r.level == ERROR_LEVEL)
            .map(|r| r.message.as_str());

        count_ranked(errors)
            .into_iter()
            .take(top_n)
            .map(|(message, count)| ErrorCount {
                message: message.to_string(),
                count,
            })
            .collect()
    }

    /// Records per clock hour, with zero-count hours filled in between the
    /// first and last observed hour.
    ///
    /// One bucket is allocated per hour of the span, whatever the record
    /// count: a file stretching from year 1 to year 9999 yields about 87M
    /// buckets. Spans beyond [`LARGE_SPAN_HOURS`] are logged at warn level.
    pub fn activity_by_hour(&self) -> Vec<HourlyActivity> {
        let mut buckets: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
        for record in self.records {
            *buckets.entry(hour_bucket(record.timestamp)).or_default() += 1;
        }

        let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back())
        else {
            return Vec::new();
        };

        let span_hours = (last - first).num_hours();
        if span_hours > LARGE_SPAN_HOURS {
            tracing::warn!(
                span_hours,
                records = self.records.len(),
                from = %first,
                to = %last,
                "log spans an unusually long period; hourly activity will be large"
            );
        }

        let capacity = usize::try_from(span_hours).map_or(0, |h| h.saturating_add(1));
        let mut activity = Vec::with_capacity(capacity);
        let mut hour = first;
        while hour <= last {
            activity.push(HourlyActivity {
                hour,
                count: buckets.get(&hour).copied().unwrap_or(0),
            });
            match hour.checked_add_signed(TimeDelta::hours(1)) {
                Some(next) => hour = next,
                None => break,
            }
        }
        activity
    }
}

/// Truncate a timestamp to the start of its clock hour.
pub fn hour_bucket(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.duration_trunc(TimeDelta::hours(1)).unwrap_or(ts)
}

/// Count occurrences of each value, sorted by count descending.
///
/// The sort is stable, so equal counts keep first-seen order.
fn count_ranked<'r>(values: impl Iterator<Item = &'r str>) -> Vec<(&'r str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
