use std::io::Write;

use crate::error::Result;
use crate::stats::StatisticValue;

use super::{StatsFormatter, format_value};

const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct StatsTextFormatter {
    period: Option<String>,
}

impl StatsTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { period: None }
    }

    #[must_use]
    pub fn with_period(mut self, period: Option<String>) -> Self {
        self.period = period;
        self
    }

    fn write_node(output: &mut Vec<u8>, node: &StatisticValue, depth: usize) {
        let indent = INDENT.repeat(depth);
        match node {
            StatisticValue::Scalar { name, value, units } => {
                writeln!(
                    output,
                    "{indent}{name}: {} {}",
                    format_value(*value),
                    units.as_str()
                )
                .ok();
            }
            StatisticValue::Bucketed {
                name,
                units,
                children,
            } => {
                writeln!(output, "{indent}{name}:").ok();
                if children.is_empty() {
                    writeln!(output, "{indent}{INDENT}(no posts)").ok();
                }
                for split in children {
                    writeln!(
                        output,
                        "{indent}{INDENT}{}: {} {}",
                        split.split_period,
                        format_value(split.value),
                        units.as_str()
                    )
                    .ok();
                }
            }
            StatisticValue::Composite { children, .. } => {
                for child in children {
                    Self::write_node(output, child, depth);
                }
            }
        }
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &StatisticValue) -> Result<String> {
        let mut output = Vec::new();

        if let Some(ref period) = self.period {
            writeln!(output, "Statistics for {period}").ok();
            writeln!(output).ok();
        }

        Self::write_node(&mut output, stats, 0);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
