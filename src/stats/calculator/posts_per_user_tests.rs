use crate::stats::test_fixtures::august_post;

use super::*;

fn average_for(authors: &[&str]) -> Option<f64> {
    let mut calculator = AveragePostsPerUserPerMonth::new();
    for author in authors {
        calculator.accumulate(&august_post(author, 10));
    }
    calculator.finalize().value()
}

#[test]
fn no_posts_is_zero() {
    assert_eq!(average_for(&[]), Some(0.0));
}

#[test]
fn three_posts_by_two_authors() {
    assert_eq!(average_for(&["user_1", "user_2", "user_1"]), Some(1.5));
}

#[test]
fn six_posts_by_four_authors() {
    assert_eq!(
        average_for(&["user_1", "user_2", "user_1", "user_3", "user_4", "user_2"]),
        Some(1.5)
    );
}

#[test]
fn authors_are_deduplicated_regardless_of_order() {
    let forward = average_for(&["a", "a", "a", "b"]);
    let backward = average_for(&["b", "a", "a", "a"]);
    let interleaved = average_for(&["a", "b", "a", "a"]);
    assert_eq!(forward, Some(2.0));
    assert_eq!(forward, backward);
    assert_eq!(forward, interleaved);
}

#[test]
fn duplicate_posts_count_separately() {
    let mut calculator = AveragePostsPerUserPerMonth::new();
    let post = august_post("user_1", 10);
    calculator.accumulate(&post);
    calculator.accumulate(&post);
    assert_eq!(calculator.finalize().value(), Some(2.0));
}

#[test]
fn average_is_rounded_to_two_decimals() {
    // 5 / 3 = 1.666...
    assert_eq!(average_for(&["a", "b", "c", "a", "b"]), Some(1.67));
}

#[test]
fn exact_half_rounds_up() {
    // 201 posts by 200 authors = 1.005
    let mut calculator = AveragePostsPerUserPerMonth::new();
    for i in 0..200 {
        calculator.accumulate(&august_post(&format!("user_{i}"), 10));
    }
    calculator.accumulate(&august_post("user_0", 10));
    assert_eq!(calculator.finalize().value(), Some(1.01));
}

#[test]
fn finalize_node_shape() {
    let node = AveragePostsPerUserPerMonth::new().finalize();
    assert_eq!(node.name(), "average-posts-per-user");
    assert_eq!(node.units(), Some(Units::Posts));
}
