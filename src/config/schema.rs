//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the timer-stream service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Logging pipeline settings (sinks, rotation, level).
    pub logging: LoggingConfig,

    /// Timer stream settings.
    pub timer: TimerConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:1111").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    /// Must comfortably exceed the full stream duration.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:1111".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Logging pipeline configuration.
///
/// One console sink plus three rotating file sinks under `directory`:
/// `app.log` (plain text), `app.json` (JSON lines), and `error.json`
/// (JSON lines, error level only).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory the rotating log files are written into.
    pub directory: String,

    /// Minimum level for the console and file sinks
    /// (trace, debug, info, warn, error).
    pub level: String,

    /// Maximum size of each live log file before rotation, in bytes.
    pub max_bytes: u64,

    /// Number of rotated backups kept per file (`name.1`..`name.N`).
    pub backup_count: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            level: "debug".to_string(),
            max_bytes: 1_000_000,
            backup_count: 3,
        }
    }
}

/// Timer stream configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Number of timestamped elements each stream produces.
    pub ticks: u32,

    /// Delay after each element in milliseconds.
    pub interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            ticks: 5,
            interval_ms: 1000,
        }
    }
}
