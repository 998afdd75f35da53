use crate::output::tests::sample_tree;
use crate::stats::{StatName, Units};

use super::*;

#[test]
fn text_formatter_lists_metrics_in_order() {
    let output = StatsTextFormatter::new().format(&sample_tree()).unwrap();
    let expected = "\
average-character-length: 501.5 characters
max-character-length: 638 characters
total-posts-per-week:
  Week 32, 2018: 5 posts
  Week 33, 2018: 1 posts
average-posts-per-user: 1.5 posts
";
    assert_eq!(output, expected);
}

#[test]
fn text_formatter_with_period_header() {
    let output = StatsTextFormatter::new()
        .with_period(Some("August, 2018".to_string()))
        .format(&sample_tree())
        .unwrap();
    assert!(output.starts_with("Statistics for August, 2018\n\n"));
}

#[test]
fn text_formatter_empty_buckets() {
    let tree = StatisticValue::composite(
        "report",
        vec![StatisticValue::bucketed(
            StatName::TotalPostsPerWeek,
            Units::Posts,
            vec![],
        )],
    );
    let output = StatsTextFormatter::new().format(&tree).unwrap();
    assert_eq!(output, "total-posts-per-week:\n  (no posts)\n");
}

#[test]
fn text_formatter_single_scalar() {
    let node = StatisticValue::scalar(StatName::MaxPostLength, 0.0, Units::Characters);
    let output = StatsTextFormatter::default().format(&node).unwrap();
    assert_eq!(output, "max-character-length: 0 characters\n");
}
