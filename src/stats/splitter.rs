//! ISO-week bucketing of timestamps.
//!
//! Weeks follow ISO-8601: weeks start on Monday and week 1 is the week
//! containing the year's first Thursday. A week is labelled with its own ISO
//! week-year, so 2019-12-30 falls in `Week 01, 2020`. Timestamps are bucketed
//! by their UTC calendar date.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

/// One bucket of a reporting period, clipped to the period boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPeriod {
    pub label: String,
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
}

impl SubPeriod {
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

/// Splits a reporting window into ISO weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodSplitter;

impl PeriodSplitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Label of the week containing `timestamp`, e.g. `Week 32, 2018`.
    #[must_use]
    pub fn label_for(&self, timestamp: DateTime<Utc>) -> String {
        Self::label_for_date(timestamp.date_naive())
    }

    fn label_for_date(date: NaiveDate) -> String {
        let week = date.iso_week();
        format!("Week {:02}, {}", week.week(), week.year())
    }

    fn week_start(date: NaiveDate) -> NaiveDate {
        date - Days::new(u64::from(date.weekday().num_days_from_monday()))
    }

    /// Enumerate the weeks overlapping `[start, end)` in chronological order.
    ///
    /// The first and last weeks are clipped to the range, so a month that
    /// starts on a Wednesday yields a first week running Wednesday to Sunday.
    #[must_use]
    pub fn periods(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<SubPeriod> {
        let mut periods = Vec::new();
        if start >= end {
            return periods;
        }
        let mut week = Self::week_start(start.date_naive());

        while let Some(next) = week.checked_add_days(Days::new(7)) {
            let week_start = midnight(week);
            if week_start >= end {
                break;
            }
            periods.push(SubPeriod {
                label: Self::label_for_date(week),
                start: week_start.max(start),
                end: midnight(next).min(end),
            });
            week = next;
        }

        periods
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
#[path = "splitter_tests.rs"]
mod tests;
