// Rolling-window traffic totals

use serde::{Deserialize, Serialize};

use super::TrafficTotals;

/// Totals for the most recent day, the last 7 days and the last 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregatedStat {
    pub day: TrafficTotals,
    pub seven_day: TrafficTotals,
    pub thirty_day: TrafficTotals,
}

/// Flat JSON shape served by GET /stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatResponse {
    pub day_rx: u64,
    pub day_tx: u64,
    pub day7_rx: u64,
    pub day7_tx: u64,
    pub day30_rx: u64,
    pub day30_tx: u64,
}

impl From<AggregatedStat> for StatResponse {
    fn from(s: AggregatedStat) -> Self {
        Self {
            day_rx: s.day.rx,
            day_tx: s.day.tx,
            day7_rx: s.seven_day.rx,
            day7_tx: s.seven_day.tx,
            day30_rx: s.thirty_day.rx,
            day30_tx: s.thirty_day.tx,
        }
    }
}
