use indexmap::IndexMap;

use crate::post::Post;
use crate::stats::{PeriodSplitter, ReportParameters, SplitValue, StatisticValue, Units};

use super::{Calculator, StatName};

/// Number of posts in each week of the report window.
///
/// Buckets appear in the order their first post was seen. With
/// [`ReportParameters::include_empty_periods`] every week of the window is
/// present from the start, in chronological order, with a count of 0.
#[derive(Debug, Clone)]
pub struct TotalPostsPerWeek {
    splitter: PeriodSplitter,
    counts: IndexMap<String, usize>,
}

impl TotalPostsPerWeek {
    #[must_use]
    pub fn new(splitter: PeriodSplitter) -> Self {
        Self {
            splitter,
            counts: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn for_params(params: &ReportParameters) -> Self {
        let mut calculator = Self::new(params.splitter());
        if params.include_empty_periods() {
            calculator.counts = params
                .sub_periods()
                .into_iter()
                .map(|period| (period.label, 0))
                .collect();
        }
        calculator
    }
}

impl Calculator for TotalPostsPerWeek {
    fn name(&self) -> StatName {
        StatName::TotalPostsPerWeek
    }

    fn accumulate(&mut self, post: &Post) {
        let label = self.splitter.label_for(post.created_at);
        *self.counts.entry(label).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52
    fn finalize(&self) -> StatisticValue {
        let children = self
            .counts
            .iter()
            .map(|(label, count)| SplitValue {
                split_period: label.clone(),
                value: *count as f64,
            })
            .collect();

        StatisticValue::bucketed(self.name(), Units::Posts, children)
    }
}

#[cfg(test)]
#[path = "posts_per_week_tests.rs"]
mod tests;
