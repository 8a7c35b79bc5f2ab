use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Certificates listed on the dashboard.
    #[serde(default = "default_certificates")]
    pub certificates: Vec<CertificateRecord>,
    /// Entries preloaded into the logs screen.
    #[serde(default = "default_logs")]
    pub logs: Vec<LogRecord>,
}

/// Initial values and choice lists for the generate dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Initial key name (default: empty).
    #[serde(default)]
    pub key_name: String,
    /// Initial key type, must be one of `key_types` (default: "EC").
    #[serde(default = "default_key_type")]
    pub key_type: String,
    /// Initial duration value (default: "24").
    #[serde(default = "default_duration")]
    pub duration: String,
    /// Initial duration unit, must be one of `duration_units` (default: "h").
    #[serde(default = "default_duration_unit")]
    pub duration_unit: String,
    /// Key types offered by the choice field.
    #[serde(default = "default_key_types")]
    pub key_types: Vec<String>,
    /// Duration units offered by the choice field.
    #[serde(default = "default_duration_units")]
    pub duration_units: Vec<String>,
}

/// Mock submission settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Delay before the mock reports success, in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Validity requested by the renew action, in seconds (default: one day).
    #[serde(default = "default_renew_duration_secs")]
    pub renew_duration_secs: u64,
}

/// Log output settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<std::path::PathBuf>,
}

/// A certificate row shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: String,
    pub name: String,
    pub status: String,
    pub expiration_date: NaiveDate,
}

/// Log severity, spelled in upper case in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// One entry on the logs screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub entry_id: String,
    /// Local time, `YYYY-MM-DDTHH:MM:SS` in config files.
    pub timestamp: NaiveDateTime,
    pub severity: Severity,
    pub message: String,
    pub trace_id: String,
    /// Command line the entry belongs to, if any.
    #[serde(default)]
    pub command: Option<String>,
}

fn default_key_type() -> String {
    "EC".to_string()
}

fn default_duration() -> String {
    "24".to_string()
}

fn default_duration_unit() -> String {
    "h".to_string()
}

fn default_key_types() -> Vec<String> {
    ["EC", "RSA", "OKP"].iter().map(|s| s.to_string()).collect()
}

fn default_duration_units() -> Vec<String> {
    ["s", "m", "h", "d"].iter().map(|s| s.to_string()).collect()
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_renew_duration_secs() -> u64 {
    86_400
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_certificates() -> Vec<CertificateRecord> {
    [
        ("123", "cert1", "active", (2026, 12, 31)),
        ("456", "cert2", "expired", (2024, 1, 15)),
        ("789", "cert3", "active", (2027, 6, 30)),
    ]
    .iter()
    .filter_map(|(id, name, status, (y, m, d))| {
        Some(CertificateRecord {
            id: id.to_string(),
            name: name.to_string(),
            status: status.to_string(),
            expiration_date: NaiveDate::from_ymd_opt(*y, *m, *d)?,
        })
    })
    .collect()
}

fn default_logs() -> Vec<LogRecord> {
    [
        ("1ab2", (2023, 6, 5, 12, 0), Severity::Debug, "222"),
        ("2cc", (2022, 1, 5, 14, 2), Severity::Info, "111"),
    ]
    .iter()
    .filter_map(|(entry_id, (y, mo, d, h, mi), severity, trace_id)| {
        Some(LogRecord {
            entry_id: entry_id.to_string(),
            timestamp: NaiveDate::from_ymd_opt(*y, *mo, *d)?.and_hms_opt(*h, *mi, 0)?,
            severity: *severity,
            message: "Test message".to_string(),
            trace_id: trace_id.to_string(),
            command: None,
        })
    })
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            submit: SubmitConfig::default(),
            logging: LoggingConfig::default(),
            certificates: default_certificates(),
            logs: default_logs(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            key_name: String::new(),
            key_type: default_key_type(),
            duration: default_duration(),
            duration_unit: default_duration_unit(),
            key_types: default_key_types(),
            duration_units: default_duration_units(),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            renew_duration_secs: default_renew_duration_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
