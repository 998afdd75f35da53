//! Statistics calculation over a stream of posts.
//!
//! A [`StatisticsOrchestrator`] drives one pass over the posts, feeding every
//! post inside the report window to each configured [`Calculator`], then
//! collects the finalized results into a single [`StatisticValue`] tree.

mod calculator;
mod orchestrator;
mod params;
mod splitter;
mod value;

#[cfg(test)]
mod test_fixtures;

pub use calculator::{
    AveragePostLength, AveragePostsPerUserPerMonth, Calculator, CalculatorSlot, MaxPostLength,
    StatName, TotalPostsPerWeek, build_calculator,
};
pub use orchestrator::{ROOT_NAME, StatisticsOrchestrator};
pub use params::ReportParameters;
pub use splitter::{PeriodSplitter, SubPeriod};
pub use value::{SplitValue, StatisticValue, Units};
