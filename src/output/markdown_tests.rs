use crate::output::tests::sample_tree;

use super::*;

#[test]
fn markdown_formatter_header_with_period() {
    let output = StatsMarkdownFormatter::new()
        .with_period(Some("August, 2018".to_string()))
        .format(&sample_tree())
        .unwrap();
    assert!(output.starts_with("## Post Statistics: August, 2018\n"));
}

#[test]
fn markdown_formatter_header_without_period() {
    let output = StatsMarkdownFormatter::new().format(&sample_tree()).unwrap();
    assert!(output.starts_with("## Post Statistics\n"));
}

#[test]
fn markdown_formatter_metric_table() {
    let output = StatsMarkdownFormatter::new().format(&sample_tree()).unwrap();
    assert!(output.contains("| Metric | Value | Units |"));
    assert!(output.contains("| average-character-length | 501.5 | characters |"));
    assert!(output.contains("| max-character-length | 638 | characters |"));
    assert!(output.contains("| average-posts-per-user | 1.5 | posts |"));
}

#[test]
fn markdown_formatter_split_table() {
    let output = StatsMarkdownFormatter::new().format(&sample_tree()).unwrap();
    assert!(output.contains("### total-posts-per-week"));
    assert!(output.contains("| Period | Value (posts) |"));
    assert!(output.contains("| Week 32, 2018 | 5 |"));
    assert!(output.contains("| Week 33, 2018 | 1 |"));
}

#[test]
fn markdown_formatter_split_tables_follow_metric_table() {
    let output = StatsMarkdownFormatter::new().format(&sample_tree()).unwrap();
    let metrics = output.find("| Metric |").unwrap();
    let weeks = output.find("### total-posts-per-week").unwrap();
    assert!(metrics < weeks);
}
