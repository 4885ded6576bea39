// Shared test helpers

use infoserv::command::CommandRunner;
use infoserv::config::TelemetryConfig;
use infoserv::models::{TrafficDate, TrafficRecord};
use infoserv::telemetry::TelemetryService;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Scripted runner: output keyed by the full command line ("vnstat --json d 30").
/// Unscripted commands print nothing, like a failed process.
#[derive(Default)]
pub struct FakeRunner {
    outputs: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command_line: &str, output: &str) -> Self {
        self.outputs.insert(command_line.to_string(), output.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, command_line: &str) -> usize {
        self.calls().iter().filter(|c| *c == command_line).count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> String {
        let mut line = program.to_string();
        for a in args {
            line.push(' ');
            line.push_str(a);
        }
        let out = self.outputs.get(&line).cloned().unwrap_or_default();
        self.calls.lock().unwrap().push(line);
        out
    }
}

pub fn service(runner: Arc<FakeRunner>) -> TelemetryService {
    TelemetryService::new(runner, TelemetryConfig::default())
}

pub const FASTFETCH_LINE: &str = "fastfetch --pipe --structure separator:os:separator:host:kernel:uptime:packages:shell:de:wm:wmtheme:theme:icons:font:cpu:gpu:memory:disk:localip";

/// One daily record; `ts` doubles as the sequence id.
pub fn record(ts: i64, rx: u64, tx: u64) -> TrafficRecord {
    TrafficRecord {
        sequence_id: ts,
        date: TrafficDate {
            year: 2026,
            month: 10,
            day: 1,
        },
        timestamp: ts,
        rx,
        tx,
    }
}

/// vnstat 2.x `--json d` document for a single interface; `days` are (timestamp, rx, tx)
/// in the order they should appear in the payload.
pub fn vnstat_json(days: &[(i64, u64, u64)]) -> String {
    let day: Vec<serde_json::Value> = days
        .iter()
        .enumerate()
        .map(|(i, (ts, rx, tx))| {
            serde_json::json!({
                "id": i,
                "date": { "year": 2026, "month": 10, "day": i + 1 },
                "timestamp": ts,
                "rx": rx,
                "tx": tx,
            })
        })
        .collect();
    serde_json::json!({
        "vnstatversion": "2.12",
        "jsonversion": "2",
        "interfaces": [{
            "name": "eth0",
            "alias": "uplink",
            "created": { "date": { "year": 2025, "month": 1, "day": 2 }, "timestamp": 1735776000 },
            "updated": {
                "date": { "year": 2026, "month": 10, "day": 14 },
                "time": { "hour": 12, "minute": 5 },
                "timestamp": 1791979500
            },
            "traffic": {
                "total": { "rx": 123456, "tx": 654321 },
                "day": day,
                "month": [],
                "hour": []
            }
        }]
    })
    .to_string()
}
