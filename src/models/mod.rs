// Domain models: parsed vnstat traffic and the aggregated stat

mod stat;
mod traffic;

pub use stat::{AggregatedStat, StatResponse};
pub use traffic::{InterfaceSnapshot, TrafficDate, TrafficRecord, TrafficTotals};
