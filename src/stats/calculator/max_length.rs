use crate::post::Post;
use crate::stats::{StatisticValue, Units};

use super::{Calculator, StatName};

/// Length of the longest post in characters.
#[derive(Debug, Default, Clone)]
pub struct MaxPostLength {
    max_length: usize,
}

impl MaxPostLength {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: 0 }
    }
}

impl Calculator for MaxPostLength {
    fn name(&self) -> StatName {
        StatName::MaxPostLength
    }

    fn accumulate(&mut self, post: &Post) {
        self.max_length = self.max_length.max(post.length());
    }

    #[allow(clippy::cast_precision_loss)] // Post lengths stay far below 2^52
    fn finalize(&self) -> StatisticValue {
        StatisticValue::scalar(self.name(), self.max_length as f64, Units::Characters)
    }
}

#[cfg(test)]
#[path = "max_length_tests.rs"]
mod tests;
