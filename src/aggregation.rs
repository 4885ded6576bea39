// Rolling 1/7/30-day traffic windows over newest-first daily records.

use crate::models::{AggregatedStat, TrafficRecord, TrafficTotals};

pub const WEEK_DAYS: usize = 7;
pub const MONTH_DAYS: usize = 30;

/// No daily records at all; distinct from a day with zero traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no daily traffic data")]
pub struct EmptyDataError;

/// Computes rolling totals. `records[0]` is the most recent day.
/// Windows shorter than the data available are partial sums, never padded.
pub fn aggregate(records: &[TrafficRecord]) -> Result<AggregatedStat, EmptyDataError> {
    let today = records.first().ok_or(EmptyDataError)?;
    Ok(AggregatedStat {
        day: today.totals(),
        seven_day: window_sum(records, WEEK_DAYS),
        thirty_day: window_sum(records, MONTH_DAYS),
    })
}

fn window_sum(records: &[TrafficRecord], days: usize) -> TrafficTotals {
    records
        .iter()
        .take(days)
        .fold(TrafficTotals::default(), |acc, r| acc.saturating_add(r.totals()))
}
