use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::stats::StatName;
use crate::{PostStatsError, Result};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Omitted means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Which statistics a report computes [report].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Statistics to compute, in output order.
    #[serde(default = "default_stats")]
    pub stats: Vec<StatName>,

    /// List every week of the month in split statistics, even weeks without posts.
    #[serde(default)]
    pub include_empty_periods: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stats: default_stats(),
            include_empty_periods: false,
        }
    }
}

/// Output settings [output].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_stats() -> Vec<StatName> {
    StatName::ALL.to_vec()
}

impl Config {
    /// Check the parts of a config that TOML parsing cannot.
    ///
    /// # Errors
    /// Returns an error for an unsupported version, an empty statistics list,
    /// or a statistic listed twice.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version
            && version != CONFIG_VERSION
        {
            return Err(PostStatsError::Config(format!(
                "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }

        if self.report.stats.is_empty() {
            return Err(PostStatsError::Config(
                "report.stats must list at least one statistic".to_string(),
            ));
        }

        for (i, name) in self.report.stats.iter().enumerate() {
            if self.report.stats[..i].contains(name) {
                return Err(PostStatsError::Config(format!(
                    "report.stats lists '{name}' more than once"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
