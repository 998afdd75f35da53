use crate::error::Result;
use crate::stats::StatisticValue;

use super::StatsFormatter;

/// Pretty-printed JSON in the `name` / `value` / `splitPeriod` / `children` shape.
#[derive(Debug, Default)]
pub struct StatsJsonFormatter;

impl StatsJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &StatisticValue) -> Result<String> {
        Ok(serde_json::to_string_pretty(stats)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
