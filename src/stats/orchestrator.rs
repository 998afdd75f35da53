//! Single-pass driver for a set of calculators.
//!
//! Posts are assumed well formed: rejecting malformed records is the job of
//! the hydrator upstream, and nothing here validates them again.

use tracing::{debug, info, trace};

use crate::Result;
use crate::config::ReportConfig;
use crate::post::Post;

use super::calculator::{CalculatorSlot, StatName, build_calculator};
use super::{ReportParameters, StatisticValue};

/// Name of the root node of every report.
pub const ROOT_NAME: &str = "report";

/// Feeds every post of a report window to a fixed set of calculators.
///
/// The calculator set is configuration: each `calculate` call builds fresh
/// calculators for the configured names, so one orchestrator can serve many
/// reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsOrchestrator {
    stats: Vec<StatName>,
}

impl Default for StatisticsOrchestrator {
    fn default() -> Self {
        Self::new(StatName::ALL.to_vec())
    }
}

impl StatisticsOrchestrator {
    /// Create an orchestrator computing `stats`, in that order.
    ///
    /// Result nodes are looked up by name, so a statistic listed more than
    /// once is computed once, at its first position.
    #[must_use]
    pub fn new(stats: Vec<StatName>) -> Self {
        let requested = stats.len();
        let mut unique = Vec::with_capacity(requested);
        for name in stats {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.len() < requested {
            debug!(requested, unique = unique.len(), "dropped duplicate statistics");
        }
        Self { stats: unique }
    }

    /// Create an orchestrator for the statistics selected in `[report]`.
    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.stats.clone())
    }

    #[must_use]
    pub fn stats(&self) -> &[StatName] {
        &self.stats
    }

    /// Compute every configured statistic in one pass over `posts`.
    ///
    /// Posts outside the report window are skipped. The root node holds one
    /// child per configured statistic, in configuration order.
    ///
    /// # Errors
    /// Returns an error only if a calculator is driven past its single pass,
    /// which indicates a bug rather than bad input.
    pub fn calculate<I>(&self, posts: I, params: &ReportParameters) -> Result<StatisticValue>
    where
        I: IntoIterator<Item = Post>,
    {
        self.try_calculate(posts.into_iter().map(Ok), params)
    }

    /// Like [`calculate`](Self::calculate), for a source that can fail mid-stream.
    ///
    /// The first upstream error ends the pass and is returned as is. Partial
    /// results are discarded: no calculator is finalized on an aborted pass.
    ///
    /// # Errors
    /// Returns the first error produced by `posts`.
    pub fn try_calculate<I>(&self, posts: I, params: &ReportParameters) -> Result<StatisticValue>
    where
        I: IntoIterator<Item = Result<Post>>,
    {
        let mut slots: Vec<CalculatorSlot> = self
            .stats
            .iter()
            .map(|name| CalculatorSlot::new(build_calculator(*name, params)))
            .collect();

        let mut accumulated = 0_usize;
        let mut skipped = 0_usize;

        for post in posts {
            let post = post?;
            if !params.contains(post.created_at) {
                trace!(id = %post.id, created_at = %post.created_at, "post outside report window");
                skipped += 1;
                continue;
            }
            for slot in &mut slots {
                slot.accumulate(&post)?;
            }
            accumulated += 1;
        }

        debug!(accumulated, skipped, calculators = slots.len(), "post pass complete");

        let children = slots
            .iter_mut()
            .map(CalculatorSlot::finalize)
            .collect::<Result<Vec<_>>>()?;

        info!(period = %params.label(), posts = accumulated, "statistics calculated");

        Ok(StatisticValue::composite(ROOT_NAME, children))
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
