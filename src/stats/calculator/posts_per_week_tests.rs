use crate::stats::test_fixtures::{at, post, reference_posts};

use super::*;

fn weekly() -> TotalPostsPerWeek {
    TotalPostsPerWeek::new(PeriodSplitter::new())
}

#[test]
fn empty_has_no_buckets() {
    let node = weekly().finalize();
    assert_eq!(node.name(), "total-posts-per-week");
    assert_eq!(node.value(), None);
    assert!(node.splits().is_empty());
    assert_eq!(node.total(), Some(0.0));
}

#[test]
fn reference_weeks() {
    let mut calculator = weekly();
    for post in &reference_posts() {
        calculator.accumulate(post);
    }
    let node = calculator.finalize();

    assert_eq!(node.splits().len(), 2);
    assert_eq!(node.split("Week 32, 2018"), Some(5.0));
    assert_eq!(node.split("Week 33, 2018"), Some(1.0));
    assert_eq!(node.total(), Some(6.0));
}

#[test]
fn buckets_keep_first_seen_order() {
    let mut calculator = weekly();
    calculator.accumulate(&post("a", 1, at(2018, 8, 20, 0, 0, 0)));
    calculator.accumulate(&post("a", 1, at(2018, 8, 6, 0, 0, 0)));
    calculator.accumulate(&post("a", 1, at(2018, 8, 21, 0, 0, 0)));

    let labels: Vec<_> = calculator
        .finalize()
        .splits()
        .iter()
        .map(|s| s.split_period.clone())
        .collect();
    assert_eq!(labels, vec!["Week 34, 2018", "Week 32, 2018"]);
}

#[test]
fn children_sum_to_total_posts() {
    let mut calculator = weekly();
    let mut accumulated = 0;
    for day in 1..=31 {
        for hour in [0, 11, 23] {
            calculator.accumulate(&post("a", 1, at(2018, 8, day, hour, 0, 0)));
            accumulated += 1;
        }
    }
    let node = calculator.finalize();
    assert_eq!(node.splits().len(), 5);
    assert_eq!(node.total(), Some(f64::from(accumulated)));
}

#[test]
fn week_boundary_post_is_counted_once() {
    let mut calculator = weekly();
    calculator.accumulate(&post("a", 1, at(2018, 8, 13, 0, 0, 0)));
    let node = calculator.finalize();
    assert_eq!(node.splits().len(), 1);
    assert_eq!(node.split("Week 33, 2018"), Some(1.0));
    assert_eq!(node.split("Week 32, 2018"), None);
}

#[test]
fn for_params_without_empty_periods_starts_empty() {
    let params = ReportParameters::for_month(2018, 8).unwrap();
    let node = TotalPostsPerWeek::for_params(&params).finalize();
    assert!(node.splits().is_empty());
}

#[test]
fn for_params_with_empty_periods_seeds_every_week() {
    let params = ReportParameters::for_month(2018, 8)
        .unwrap()
        .with_empty_periods(true);
    let mut calculator = TotalPostsPerWeek::for_params(&params);
    for post in &reference_posts() {
        calculator.accumulate(post);
    }
    let node = calculator.finalize();

    let splits: Vec<_> = node
        .splits()
        .iter()
        .map(|s| (s.split_period.as_str(), s.value))
        .collect();
    assert_eq!(
        splits,
        vec![
            ("Week 31, 2018", 0.0),
            ("Week 32, 2018", 5.0),
            ("Week 33, 2018", 1.0),
            ("Week 34, 2018", 0.0),
            ("Week 35, 2018", 0.0),
        ]
    );
}

#[test]
fn finalize_is_a_pure_read() {
    let mut calculator = weekly();
    for post in &reference_posts() {
        calculator.accumulate(post);
    }
    assert_eq!(calculator.finalize(), calculator.finalize());
}
