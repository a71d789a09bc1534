//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the whole process
//! - Wire the console sink plus the three rotating file sinks
//! - Route value-producing targets (`timer`, `rng`, call wrappers) to
//!   the file sinks; everything reaches the console
//!
//! # Design Decisions
//! - JSON format for the machine-readable files, pretty format for the
//!   console
//! - Console level overridable via `RUST_LOG`; file levels come from
//!   config
//! - `error.json` keeps the same targets but only error-level events

use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::observability::rolling::RollingFile;

/// Targets whose events are persisted to the file sinks.
const FILE_TARGETS: [&str; 3] = [
    "timer_stream::timer",
    "timer_stream::rng",
    "timer_stream::observability::instrument",
];

/// Initialize the global subscriber from config.
///
/// Opens the three rotating files under `config.directory` and installs
/// a four-layer registry. Call once at startup, before any request is
/// served.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let level = parse_level(&config.level);
    let dir = Path::new(&config.directory);

    let open = |name: &str| -> io::Result<Mutex<RollingFile>> {
        Ok(Mutex::new(RollingFile::open(
            dir.join(name),
            config.max_bytes,
            config.backup_count,
        )?))
    };

    let file_targets = FILE_TARGETS
        .iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(*target, level)
        });
    let error_targets = FILE_TARGETS
        .iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(*target, LevelFilter::ERROR)
        });

    let console = tracing_subscriber::fmt::layer().with_filter(
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("timer_stream={level}"))),
    );

    let plain_file = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(open("app.log")?)
        .with_filter(file_targets.clone());

    let json_file = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(open("app.json")?)
        .with_filter(file_targets);

    let error_file = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(open("error.json")?)
        .with_filter(error_targets);

    tracing_subscriber::registry()
        .with(console)
        .with(plain_file)
        .with(json_file)
        .with(error_file)
        .init();

    Ok(())
}

fn parse_level(level: &str) -> LevelFilter {
    match level {
        "trace" => LevelFilter::TRACE,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::DEBUG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomSource;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn level_parsing_defaults_to_debug() {
        assert_eq!(parse_level("warn"), LevelFilter::WARN);
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level("garbage"), LevelFilter::DEBUG);
    }

    #[test]
    fn json_sink_captures_the_bonus_number_field() {
        let path: PathBuf = std::env::temp_dir()
            .join(format!("timer-stream-logging-{}", uuid::Uuid::new_v4()))
            .join("app.json");
        let writer = Mutex::new(RollingFile::open(&path, 1_000_000, 3).unwrap());

        let subscriber = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer));
        tracing::subscriber::with_default(subscriber, || {
            RandomSource::new().sample();
        });

        let content = fs::read_to_string(&path).unwrap();
        let line = content
            .lines()
            .find(|line| line.contains("bonus_number"))
            .unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();

        let bonus = event["fields"]["bonus_number"].as_u64().unwrap();
        assert!((1..=1000).contains(&bonus));
        assert_eq!(event["target"], "timer_stream::rng");
    }
}
