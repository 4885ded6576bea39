// vnstat `--json` document -> InterfaceSnapshot.
// Wire structs stay private; only the first interface is kept.

use std::cmp::Reverse;

use serde::{Deserialize, Deserializer};

use crate::models::{InterfaceSnapshot, TrafficDate, TrafficRecord, TrafficTotals};

/// vnstat 2.x emits byte counters and a `day` array under this schema version.
pub const SUPPORTED_JSON_VERSION: &str = "2";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported vnstat json version {0}")]
    UnsupportedVersion(String),
    #[error("empty data")]
    NoInterfaceData,
}

#[derive(Debug, Deserialize)]
struct VnstatDocument {
    #[serde(deserialize_with = "string_or_number")]
    jsonversion: String,
    interfaces: Vec<VnstatInterface>,
}

#[derive(Debug, Deserialize)]
struct VnstatInterface {
    name: String,
    #[serde(default)]
    alias: String,
    created: VnstatTime,
    updated: VnstatTime,
    traffic: VnstatTraffic,
}

#[derive(Debug, Deserialize)]
struct VnstatTime {
    #[serde(default)]
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct VnstatTraffic {
    total: TrafficTotals,
    #[serde(default)]
    day: Vec<VnstatDay>,
}

#[derive(Debug, Deserialize)]
struct VnstatDay {
    id: i64,
    date: TrafficDate,
    timestamp: i64,
    rx: u64,
    tx: u64,
}

/// vnstat prints `"jsonversion":"2"`; older tooling wrote a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Number(u64),
    }
    Ok(match Version::deserialize(deserializer)? {
        Version::Text(s) => s,
        Version::Number(n) => n.to_string(),
    })
}

/// Parses a vnstat JSON payload into the snapshot of its first interface.
/// Daily records come back newest-first regardless of the order vnstat printed them.
pub fn parse(payload: &str) -> Result<InterfaceSnapshot, ParseError> {
    let doc: VnstatDocument = serde_json::from_str(payload)?;
    if doc.jsonversion != SUPPORTED_JSON_VERSION {
        return Err(ParseError::UnsupportedVersion(doc.jsonversion));
    }
    let iface = doc
        .interfaces
        .into_iter()
        .next()
        .ok_or(ParseError::NoInterfaceData)?;

    let mut daily_records: Vec<TrafficRecord> = iface
        .traffic
        .day
        .into_iter()
        .map(|d| TrafficRecord {
            sequence_id: d.id,
            date: d.date,
            timestamp: d.timestamp,
            rx: d.rx,
            tx: d.tx,
        })
        .collect();
    // Stable: equal timestamps keep source order.
    daily_records.sort_by_key(|r| Reverse(r.timestamp));

    Ok(InterfaceSnapshot {
        name: iface.name,
        alias: iface.alias,
        created_at: iface.created.timestamp,
        updated_at: iface.updated.timestamp,
        total_traffic: iface.traffic.total,
        daily_records,
    })
}
