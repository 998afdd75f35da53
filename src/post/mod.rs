//! Post records and the feed they are hydrated from.

mod hydrator;

pub use hydrator::{FeedHydrator, RawPost};

use chrono::{DateTime, Utc};

/// A single social media post.
///
/// Posts are validated by [`FeedHydrator`] before they reach the statistics
/// code, which reads them without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub body: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Length of the post body in characters.
    #[must_use]
    pub fn length(&self) -> usize {
        self.body.chars().count()
    }
}
