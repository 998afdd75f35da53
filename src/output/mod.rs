mod json;
mod markdown;
mod text;

pub use json::StatsJsonFormatter;
pub use markdown::StatsMarkdownFormatter;
pub use text::StatsTextFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::StatisticValue;

/// Trait for rendering a statistics tree into an output format.
pub trait StatsFormatter {
    /// Format the statistics tree into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &StatisticValue) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[serde(alias = "md")]
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    /// Build the formatter for this format, labelled with the report period.
    #[must_use]
    pub fn formatter(self, period: Option<String>) -> Box<dyn StatsFormatter> {
        match self {
            Self::Text => Box::new(StatsTextFormatter::new().with_period(period)),
            Self::Json => Box::new(StatsJsonFormatter::new()),
            Self::Markdown => Box::new(StatsMarkdownFormatter::new().with_period(period)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Render a metric value without a trailing `.0` for whole numbers.
fn format_value(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
