use std::collections::HashSet;

use crate::post::Post;
use crate::stats::{StatisticValue, Units};

use super::{Calculator, StatName, average};

/// Average number of posts per distinct author over the report window.
#[derive(Debug, Default, Clone)]
pub struct AveragePostsPerUserPerMonth {
    post_count: usize,
    authors: HashSet<String>,
}

impl AveragePostsPerUserPerMonth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Calculator for AveragePostsPerUserPerMonth {
    fn name(&self) -> StatName {
        StatName::AveragePostsPerUser
    }

    fn accumulate(&mut self, post: &Post) {
        self.post_count += 1;
        if !self.authors.contains(&post.author_id) {
            self.authors.insert(post.author_id.clone());
        }
    }

    fn finalize(&self) -> StatisticValue {
        // No posts means no authors, so the average falls back to 0.
        StatisticValue::scalar(
            self.name(),
            average(self.post_count, self.authors.len()),
            Units::Posts,
        )
    }
}

#[cfg(test)]
#[path = "posts_per_user_tests.rs"]
mod tests;
