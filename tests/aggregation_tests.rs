// Rolling-window aggregation: day / 7-day / 30-day totals over newest-first records

mod common;

use common::record;
use infoserv::aggregation::{EmptyDataError, aggregate};
use infoserv::models::TrafficTotals;

#[test]
fn aggregate_empty_is_an_error() {
    assert_eq!(aggregate(&[]), Err(EmptyDataError));
}

#[test]
fn aggregate_three_days_newest_first() {
    let records = vec![record(3, 10, 5), record(2, 20, 5), record(1, 30, 5)];
    let stat = aggregate(&records).unwrap();
    assert_eq!(stat.day, TrafficTotals::new(10, 5));
    assert_eq!(stat.seven_day, TrafficTotals::new(60, 15));
    assert_eq!(stat.thirty_day, TrafficTotals::new(60, 15));
}

#[test]
fn aggregate_single_day_fills_every_window() {
    let stat = aggregate(&[record(1, 7, 9)]).unwrap();
    assert_eq!(stat.day, stat.seven_day);
    assert_eq!(stat.day, stat.thirty_day);
    assert_eq!(stat.day, TrafficTotals::new(7, 9));
}

#[test]
fn aggregate_zero_traffic_is_valid_data() {
    let stat = aggregate(&[record(1, 0, 0)]).unwrap();
    assert_eq!(stat.thirty_day, TrafficTotals::default());
}

#[test]
fn aggregate_seven_day_window_stops_at_seven_records() {
    // rx = 1..=30, newest first
    let records: Vec<_> = (1..=30u64).map(|i| record(100 - i as i64, i, 2 * i)).collect();
    let stat = aggregate(&records).unwrap();
    assert_eq!(stat.day, TrafficTotals::new(1, 2));
    assert_eq!(stat.seven_day, TrafficTotals::new(28, 56));
    assert_eq!(stat.thirty_day, TrafficTotals::new(465, 930));
}

#[test]
fn aggregate_thirty_day_window_ignores_older_records() {
    let records: Vec<_> = (0..45i64).map(|i| record(1000 - i, 1, 1)).collect();
    let stat = aggregate(&records).unwrap();
    assert_eq!(stat.seven_day, TrafficTotals::new(7, 7));
    assert_eq!(stat.thirty_day, TrafficTotals::new(30, 30));
}

#[test]
fn aggregate_saturates_instead_of_wrapping() {
    let records = vec![record(2, u64::MAX, 1), record(1, 5, 1)];
    let stat = aggregate(&records).unwrap();
    assert_eq!(stat.seven_day.rx, u64::MAX);
    assert_eq!(stat.seven_day.tx, 2);
}
