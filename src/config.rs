use serde::Deserialize;

/// Largest day count vnstat is asked for by `/stat` (and accepted by `/rawstat`).
pub const MAX_DAYS: u32 = 90;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    /// How long in-flight requests may run after a shutdown signal before the listener is dropped.
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

fn default_port() -> u16 {
    8091
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_shutdown_grace_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_vnstat_bin")]
    pub vnstat_bin: String,
    #[serde(default = "default_fastfetch_bin")]
    pub fastfetch_bin: String,
    /// Days requested from `vnstat --json d <n>` for the aggregated stat.
    #[serde(default = "default_stat_days")]
    pub stat_days: u32,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            vnstat_bin: default_vnstat_bin(),
            fastfetch_bin: default_fastfetch_bin(),
            stat_days: default_stat_days(),
        }
    }
}

fn default_vnstat_bin() -> String {
    "vnstat".into()
}

fn default_fastfetch_bin() -> String {
    "fastfetch".into()
}

fn default_stat_days() -> u32 {
    30
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// `host:port` the info server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            self.server.shutdown_grace_secs > 0,
            "server.shutdown_grace_secs must be > 0, got {}",
            self.server.shutdown_grace_secs
        );
        anyhow::ensure!(
            !self.telemetry.vnstat_bin.is_empty(),
            "telemetry.vnstat_bin must be non-empty"
        );
        anyhow::ensure!(
            !self.telemetry.fastfetch_bin.is_empty(),
            "telemetry.fastfetch_bin must be non-empty"
        );
        anyhow::ensure!(
            (1..=MAX_DAYS).contains(&self.telemetry.stat_days),
            "telemetry.stat_days must be between 1 and {}, got {}",
            MAX_DAYS,
            self.telemetry.stat_days
        );
        Ok(())
    }
}
