use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::stats::StatisticValue;

use super::{StatsFormatter, format_value};

#[derive(Debug, Default)]
pub struct StatsMarkdownFormatter {
    period: Option<String>,
}

impl StatsMarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { period: None }
    }

    #[must_use]
    pub fn with_period(mut self, period: Option<String>) -> Self {
        self.period = period;
        self
    }

    /// Scalar metrics of the tree in order, skipping containers.
    fn scalars(node: &StatisticValue) -> Vec<&StatisticValue> {
        match node {
            StatisticValue::Scalar { .. } => vec![node],
            StatisticValue::Bucketed { .. } => Vec::new(),
            StatisticValue::Composite { children, .. } => {
                children.iter().flat_map(Self::scalars).collect()
            }
        }
    }

    fn bucketed(node: &StatisticValue) -> Vec<&StatisticValue> {
        match node {
            StatisticValue::Bucketed { .. } => vec![node],
            StatisticValue::Scalar { .. } => Vec::new(),
            StatisticValue::Composite { children, .. } => {
                children.iter().flat_map(Self::bucketed).collect()
            }
        }
    }
}

impl StatsFormatter for StatsMarkdownFormatter {
    fn format(&self, stats: &StatisticValue) -> Result<String> {
        let mut output = String::new();

        match self.period {
            Some(ref period) => writeln!(output, "## Post Statistics: {period}\n").ok(),
            None => writeln!(output, "## Post Statistics\n").ok(),
        };

        let scalars = Self::scalars(stats);
        if !scalars.is_empty() {
            writeln!(output, "| Metric | Value | Units |").ok();
            writeln!(output, "|--------|------:|-------|").ok();
            for node in scalars {
                if let StatisticValue::Scalar { name, value, units } = node {
                    writeln!(
                        output,
                        "| {name} | {} | {} |",
                        format_value(*value),
                        units.as_str()
                    )
                    .ok();
                }
            }
        }

        for node in Self::bucketed(stats) {
            if let StatisticValue::Bucketed {
                name,
                units,
                children,
            } = node
            {
                writeln!(output, "\n### {name}\n").ok();
                writeln!(output, "| Period | Value ({}) |", units.as_str()).ok();
                writeln!(output, "|--------|------:|").ok();
                for split in children {
                    writeln!(
                        output,
                        "| {} | {} |",
                        split.split_period,
                        format_value(split.value)
                    )
                    .ok();
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
