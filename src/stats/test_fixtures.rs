//! Shared post builders for statistics tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::post::Post;

/// Timestamp in UTC.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// A post by `author` with a body of exactly `length` characters.
pub fn post(author: &str, length: usize, created_at: DateTime<Utc>) -> Post {
    Post {
        id: format!("{author}-{}", created_at.timestamp()),
        author_id: author.to_string(),
        author_name: author.to_uppercase(),
        body: "x".repeat(length),
        kind: "status".to_string(),
        created_at,
    }
}

/// A post on 2018-08-10 by `author` with a body of `length` characters.
pub fn august_post(author: &str, length: usize) -> Post {
    post(author, length, at(2018, 8, 10, 12, 0, 0))
}

/// The reference August 2018 feed: six posts by four authors.
///
/// Lengths average 501.5 with a maximum of 638; five posts fall in ISO
/// week 32 and one in week 33.
pub fn reference_posts() -> Vec<Post> {
    vec![
        post("user_1", 638, at(2018, 8, 6, 9, 15, 0)),
        post("user_2", 365, at(2018, 8, 7, 14, 2, 11)),
        post("user_1", 501, at(2018, 8, 9, 8, 40, 0)),
        post("user_3", 501, at(2018, 8, 10, 17, 10, 34)),
        post("user_4", 502, at(2018, 8, 12, 23, 59, 59)),
        post("user_2", 502, at(2018, 8, 13, 0, 0, 0)),
    ]
}
