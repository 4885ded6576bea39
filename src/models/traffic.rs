// Per-interface traffic as reported by vnstat

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrafficTotals {
    pub rx: u64,
    pub tx: u64,
}

impl TrafficTotals {
    pub fn new(rx: u64, tx: u64) -> Self {
        Self { rx, tx }
    }

    /// Adds without wrapping; counters pin at `u64::MAX`.
    pub fn saturating_add(self, other: TrafficTotals) -> Self {
        Self {
            rx: self.rx.saturating_add(other.rx),
            tx: self.tx.saturating_add(other.tx),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// One day of traffic for an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficRecord {
    pub sequence_id: i64,
    pub date: TrafficDate,
    /// Epoch seconds.
    pub timestamp: i64,
    pub rx: u64,
    pub tx: u64,
}

impl TrafficRecord {
    pub fn totals(&self) -> TrafficTotals {
        TrafficTotals::new(self.rx, self.tx)
    }
}

/// The first interface of a vnstat report. `daily_records` is newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSnapshot {
    pub name: String,
    pub alias: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub total_traffic: TrafficTotals,
    pub daily_records: Vec<TrafficRecord>,
}
