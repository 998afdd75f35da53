mod average_length;
mod max_length;
mod posts_per_user;
mod posts_per_week;

pub use average_length::AveragePostLength;
pub use max_length::MaxPostLength;
pub use posts_per_user::AveragePostsPerUserPerMonth;
pub use posts_per_week::TotalPostsPerWeek;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::post::Post;
use crate::{PostStatsError, Result};

use super::{ReportParameters, StatisticValue};

/// Decimal places kept by averaging calculators.
pub const AVERAGE_DECIMALS: u32 = 2;

/// Identifier of a metric, used as the result node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatName {
    #[serde(rename = "average-character-length")]
    AveragePostLength,
    #[serde(rename = "max-character-length")]
    MaxPostLength,
    #[serde(rename = "average-posts-per-user")]
    AveragePostsPerUser,
    #[serde(rename = "total-posts-per-week")]
    TotalPostsPerWeek,
}

impl StatName {
    /// Every metric, in default report order.
    pub const ALL: [Self; 4] = [
        Self::AveragePostLength,
        Self::MaxPostLength,
        Self::TotalPostsPerWeek,
        Self::AveragePostsPerUser,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AveragePostLength => "average-character-length",
            Self::MaxPostLength => "max-character-length",
            Self::AveragePostsPerUser => "average-posts-per-user",
            Self::TotalPostsPerWeek => "total-posts-per-week",
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|n| n.as_str()).collect();
                format!("Unknown statistic: {s}. Expected one of: {}", known.join(", "))
            })
    }
}

/// A single metric computed in one pass over the posts.
///
/// `accumulate` is the only method that changes state. `finalize` projects
/// the accumulated state into a result node and must return a defined default
/// when no post was accumulated.
///
/// An instance serves a single pass: accumulate, then finalize once. The
/// trait itself does not enforce this; wrap the calculator in a
/// [`CalculatorSlot`] to get [`PostStatsError::CalculatorReused`] on misuse.
pub trait Calculator {
    fn name(&self) -> StatName;

    fn accumulate(&mut self, post: &Post);

    fn finalize(&self) -> StatisticValue;
}

/// Build the calculator for `name`, configured for the given report window.
#[must_use]
pub fn build_calculator(name: StatName, params: &ReportParameters) -> Box<dyn Calculator> {
    match name {
        StatName::AveragePostLength => Box::new(AveragePostLength::new()),
        StatName::MaxPostLength => Box::new(MaxPostLength::new()),
        StatName::AveragePostsPerUser => Box::new(AveragePostsPerUserPerMonth::new()),
        StatName::TotalPostsPerWeek => Box::new(TotalPostsPerWeek::for_params(params)),
    }
}

/// Enforces the single accumulate/finalize pass of a calculator.
pub struct CalculatorSlot {
    calculator: Box<dyn Calculator>,
    finalized: bool,
}

impl CalculatorSlot {
    #[must_use]
    pub fn new(calculator: Box<dyn Calculator>) -> Self {
        Self {
            calculator,
            finalized: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> StatName {
        self.calculator.name()
    }

    /// Feed one post to the calculator.
    ///
    /// # Errors
    /// Returns [`PostStatsError::CalculatorReused`] if the calculator was already finalized.
    pub fn accumulate(&mut self, post: &Post) -> Result<()> {
        if self.finalized {
            return Err(PostStatsError::CalculatorReused {
                name: self.name(),
                operation: "accumulate",
            });
        }
        self.calculator.accumulate(post);
        Ok(())
    }

    /// Produce the calculator's result. Callable once.
    ///
    /// # Errors
    /// Returns [`PostStatsError::CalculatorReused`] on a second call.
    pub fn finalize(&mut self) -> Result<StatisticValue> {
        if self.finalized {
            return Err(PostStatsError::CalculatorReused {
                name: self.name(),
                operation: "finalize",
            });
        }
        self.finalized = true;
        Ok(self.calculator.finalize())
    }
}

impl fmt::Debug for CalculatorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorSlot")
            .field("name", &self.name())
            .field("finalized", &self.finalized)
            .finish()
    }
}

/// `numerator / denominator` rounded half away from zero to
/// [`AVERAGE_DECIMALS`] places, or 0 for an empty denominator.
///
/// Both inputs are counts, so the rounding is done on integers and exact
/// halves such as 201 / 200 = 1.005 always round up.
#[allow(clippy::cast_precision_loss)] // Scaled quotients stay far below 2^52
fn average(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let scale = 10_u128.pow(AVERAGE_DECIMALS);
    let numerator = numerator as u128;
    let denominator = denominator as u128;
    let scaled = (2 * numerator * scale + denominator) / (2 * denominator);
    scaled as f64 / scale as f64
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
