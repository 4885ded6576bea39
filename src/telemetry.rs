// Request-level telemetry operations: /info snapshot, /stat aggregate, /rawstat passthrough.

use std::sync::Arc;

use tracing::instrument;

use crate::aggregation::{self, EmptyDataError};
use crate::cache::FreshnessCache;
use crate::command::{self, CommandRunner};
use crate::config::{MAX_DAYS, TelemetryConfig};
use crate::models::AggregatedStat;
use crate::traffic_parser::{self, ParseError};

const FASTFETCH_STRUCTURE: &str = "separator:os:separator:host:kernel:uptime:packages:shell:de:wm:wmtheme:theme:icons:font:cpu:gpu:memory:disk:localip";

/// Cursor-forward sequences fastfetch leaves in piped output.
const FASTFETCH_NOISE: [&str; 2] = ["[34C", "[31C"];

/// vnstat text reports appended after fastfetch, in order.
const VNSTAT_REPORTS: [&[&str]; 4] = [&[], &["-h"], &["-hg"], &["-5"]];

pub const DEFAULT_RAW_MODE: &str = "d";
pub const DEFAULT_RAW_LIMIT: &str = "30";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// External command failed or printed nothing.
    #[error("error")]
    CommandFailure,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("empty data")]
    EmptyData(#[from] EmptyDataError),
    #[error("limit must be <= {max}, got {limit}")]
    Validation { limit: i64, max: u32 },
}

pub struct TelemetryService {
    runner: Arc<dyn CommandRunner>,
    config: TelemetryConfig,
    info_cache: FreshnessCache,
}

impl TelemetryService {
    pub fn new(runner: Arc<dyn CommandRunner>, config: TelemetryConfig) -> Self {
        Self {
            runner,
            config,
            info_cache: FreshnessCache::new(),
        }
    }

    /// Full-text dashboard. Never fails: a failed command contributes an empty segment.
    pub async fn snapshot(&self) -> String {
        self.info_cache
            .get_or_compute(|| self.compute_snapshot())
            .await
    }

    /// Same as [`snapshot`](Self::snapshot) with an explicit clock reading (epoch seconds).
    pub async fn snapshot_at(&self, now: i64) -> String {
        self.info_cache
            .get_or_compute_at(now, || self.compute_snapshot())
            .await
    }

    async fn compute_snapshot(&self) -> String {
        let mut out = self
            .run(
                &self.config.fastfetch_bin,
                &["--pipe", "--structure", FASTFETCH_STRUCTURE],
            )
            .await;
        for noise in FASTFETCH_NOISE {
            out = out.replace(noise, "");
        }
        for args in VNSTAT_REPORTS {
            out.push_str(&self.run(&self.config.vnstat_bin, args).await);
        }
        out
    }

    /// Rolling 1/7/30-day totals from `vnstat --json d <stat_days>`.
    #[instrument(skip(self), fields(operation = "stat"))]
    pub async fn stat(&self) -> Result<AggregatedStat, TelemetryError> {
        let days = self.config.stat_days.to_string();
        let payload = self
            .run(&self.config.vnstat_bin, &["--json", "d", days.as_str()])
            .await;
        if payload.is_empty() {
            return Err(TelemetryError::CommandFailure);
        }
        let snapshot = traffic_parser::parse(&payload)?;
        tracing::debug!(
            interface = %snapshot.name,
            days = snapshot.daily_records.len(),
            "parsed vnstat daily records"
        );
        Ok(aggregation::aggregate(&snapshot.daily_records)?)
    }

    /// vnstat JSON passthrough. `mode` is passed through as-is; `limit` is only
    /// bounds-checked when it parses as an integer. Both go to vnstat as separate
    /// arguments, never through a shell. Empty values fall back to the defaults.
    #[instrument(skip(self), fields(operation = "raw_stat"))]
    pub async fn raw_stat(
        &self,
        mode: Option<&str>,
        limit: Option<&str>,
    ) -> Result<String, TelemetryError> {
        let mode = mode.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_RAW_MODE);
        let limit = limit.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_RAW_LIMIT);
        if let Ok(n) = limit.parse::<i64>()
            && n > i64::from(MAX_DAYS)
        {
            return Err(TelemetryError::Validation {
                limit: n,
                max: MAX_DAYS,
            });
        }
        let out = self
            .run(&self.config.vnstat_bin, &["--json", mode, limit])
            .await;
        if out.is_empty() {
            return Err(TelemetryError::CommandFailure);
        }
        Ok(out)
    }

    async fn run(&self, program: &str, args: &[&str]) -> String {
        command::run_blocking(
            self.runner.clone(),
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        )
        .await
    }
}
