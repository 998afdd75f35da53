use crate::post::Post;
use crate::stats::{StatisticValue, Units};

use super::{Calculator, StatName, average};

/// Average post length in characters, rounded to two decimals.
#[derive(Debug, Default, Clone)]
pub struct AveragePostLength {
    total_length: usize,
    post_count: usize,
}

impl AveragePostLength {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_length: 0,
            post_count: 0,
        }
    }
}

impl Calculator for AveragePostLength {
    fn name(&self) -> StatName {
        StatName::AveragePostLength
    }

    fn accumulate(&mut self, post: &Post) {
        self.total_length += post.length();
        self.post_count += 1;
    }

    fn finalize(&self) -> StatisticValue {
        StatisticValue::scalar(
            self.name(),
            average(self.total_length, self.post_count),
            Units::Characters,
        )
    }
}

#[cfg(test)]
#[path = "average_length_tests.rs"]
mod tests;
