//! JSON feed parsing and post validation.
//!
//! The feed document is parsed into memory in full before any post is
//! hydrated; only the conversion from [`RawPost`] to [`Post`] is lazy. Memory
//! use therefore grows with the size of the feed.

use std::io::Read;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::{PostStatsError, Result};

use super::Post;

/// A post as it appears in the feed, before validation.
///
/// Every field is optional here so that a single malformed post is reported
/// by id instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub from_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// Accepted feed documents: the API response envelope or a bare post list.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Response { data: FeedData },
    Posts(Vec<RawPost>),
}

#[derive(Deserialize)]
struct FeedData {
    posts: Vec<RawPost>,
}

/// Turns a JSON post feed into validated [`Post`] values.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedHydrator;

impl FeedHydrator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a feed document into raw posts.
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON of a known shape.
    pub fn parse_feed(&self, content: &str) -> Result<Vec<RawPost>> {
        let document: FeedDocument = serde_json::from_str(content)?;
        Ok(Self::into_posts(document))
    }

    /// Parse a feed document from a reader into raw posts.
    ///
    /// # Errors
    /// Returns an error if reading fails or the document has an unknown shape.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Vec<RawPost>> {
        let document: FeedDocument = serde_json::from_reader(reader)?;
        Ok(Self::into_posts(document))
    }

    fn into_posts(document: FeedDocument) -> Vec<RawPost> {
        let posts = match document {
            FeedDocument::Response { data } => data.posts,
            FeedDocument::Posts(posts) => posts,
        };
        debug!(posts = posts.len(), "parsed post feed");
        posts
    }

    /// Validate one raw post.
    ///
    /// # Errors
    /// Returns [`PostStatsError::Hydrate`] if a required field is missing or
    /// `created_time` is not an RFC 3339 timestamp.
    pub fn hydrate(&self, raw: RawPost) -> Result<Post> {
        let id = raw.id.unwrap_or_else(|| "<unknown>".to_string());
        let missing = |field: &str| PostStatsError::Hydrate {
            id: id.clone(),
            reason: format!("missing field `{field}`"),
        };

        let author_id = raw.from_id.ok_or_else(|| missing("from_id"))?;
        let body = raw.message.ok_or_else(|| missing("message"))?;
        let created_time = raw.created_time.ok_or_else(|| missing("created_time"))?;
        let created_at = DateTime::parse_from_rfc3339(&created_time)
            .map_err(|e| PostStatsError::Hydrate {
                id: id.clone(),
                reason: format!("invalid created_time '{created_time}': {e}"),
            })?
            .with_timezone(&Utc);

        Ok(Post {
            author_name: raw.from_name.unwrap_or_default(),
            kind: raw.kind.unwrap_or_default(),
            id,
            author_id,
            body,
            created_at,
        })
    }

    /// Lazily hydrate raw posts in feed order.
    pub fn hydrate_all(self, raw_posts: Vec<RawPost>) -> impl Iterator<Item = Result<Post>> {
        raw_posts.into_iter().map(move |raw| self.hydrate(raw))
    }
}

#[cfg(test)]
#[path = "hydrator_tests.rs"]
mod tests;
