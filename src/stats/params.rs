use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};

use crate::{PostStatsError, Result};

use super::splitter::{PeriodSplitter, SubPeriod};

/// Month descriptor formats accepted by [`ReportParameters::from_descriptor`],
/// applied to the descriptor prefixed with a day number.
const DESCRIPTOR_FORMATS: &[&str] = &["%d %B, %Y", "%d %B %Y"];

/// Resolved reporting window for one report request.
///
/// The window is half-open: `period_start` is the first instant of the month
/// and `period_end` the first instant of the following month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParameters {
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    splitter: PeriodSplitter,
    include_empty_periods: bool,
}

impl ReportParameters {
    /// Create parameters for an arbitrary `[start, end)` window.
    ///
    /// # Errors
    /// Returns an error if `start` is not before `end`.
    pub fn new(period_start: DateTime<Utc>, period_end: DateTime<Utc>) -> Result<Self> {
        if period_start >= period_end {
            return Err(PostStatsError::InvalidPeriod(format!(
                "period start {period_start} must be before period end {period_end}"
            )));
        }

        Ok(Self {
            period_start,
            period_end,
            splitter: PeriodSplitter::new(),
            include_empty_periods: false,
        })
    }

    /// Parameters covering one calendar month, split into ISO weeks.
    ///
    /// # Errors
    /// Returns an error if `month` is not in `1..=12` or the year is out of range.
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            PostStatsError::InvalidPeriod(format!("{year}-{month:02} is not a valid month"))
        })?;
        let next = first.checked_add_months(Months::new(1)).ok_or_else(|| {
            PostStatsError::InvalidPeriod(format!("{year}-{month:02} is out of range"))
        })?;

        Self::new(
            first.and_time(NaiveTime::MIN).and_utc(),
            next.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    /// Build parameters from a human-readable month such as `August, 2018`.
    ///
    /// Also accepts `August 2018`, abbreviated month names (`Aug, 2018`) and
    /// the numeric form `2018-08`.
    ///
    /// # Errors
    /// Returns an error if the descriptor is not a recognizable month.
    pub fn from_descriptor(descriptor: &str) -> Result<Self> {
        let descriptor = descriptor.trim();
        let invalid = || {
            PostStatsError::InvalidPeriod(format!(
                "'{descriptor}'. Expected a month such as 'August, 2018' or '2018-08'"
            ))
        };

        if descriptor.is_empty() {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(&format!("{descriptor}-01"), "%Y-%m-%d")
            .ok()
            .or_else(|| {
                let prefixed = format!("1 {descriptor}");
                DESCRIPTOR_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(&prefixed, fmt).ok())
            })
            .ok_or_else(invalid)?;

        Self::for_month(date.year(), date.month())
    }

    /// Report every sub-period of the window, including those without posts.
    #[must_use]
    pub const fn with_empty_periods(mut self, include: bool) -> Self {
        self.include_empty_periods = include;
        self
    }

    #[must_use]
    pub const fn include_empty_periods(&self) -> bool {
        self.include_empty_periods
    }

    #[must_use]
    pub const fn period_start(&self) -> DateTime<Utc> {
        self.period_start
    }

    #[must_use]
    pub const fn period_end(&self) -> DateTime<Utc> {
        self.period_end
    }

    #[must_use]
    pub const fn splitter(&self) -> PeriodSplitter {
        self.splitter
    }

    /// Whether `timestamp` falls inside the reporting window.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.period_start <= timestamp && timestamp < self.period_end
    }

    /// Sub-period boundaries of the window, in chronological order.
    #[must_use]
    pub fn sub_periods(&self) -> Vec<SubPeriod> {
        self.splitter.periods(self.period_start, self.period_end)
    }

    /// Human-readable name of the window's first month, e.g. `August, 2018`.
    #[must_use]
    pub fn label(&self) -> String {
        self.period_start.format("%B, %Y").to_string()
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
