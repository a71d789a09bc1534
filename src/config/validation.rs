//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (rotation cap > 0, at least one tick)
//! - Check the bind address and log level parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic violation found in a config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("listener.request_timeout_secs must be at least 1")]
    RequestTimeout,

    #[error("logging.level {0:?} is not one of trace/debug/info/warn/error")]
    LogLevel(String),

    #[error("logging.max_bytes must be greater than 0")]
    MaxBytes,

    #[error("logging.backup_count must be at least 1")]
    BackupCount,

    #[error("timer.ticks must be at least 1")]
    Ticks,

    #[error("timer.interval_ms must be at least 1")]
    Interval,
}

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized config, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if !LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ValidationError::LogLevel(config.logging.level.clone()));
    }
    if config.logging.max_bytes == 0 {
        errors.push(ValidationError::MaxBytes);
    }
    if config.logging.backup_count == 0 {
        errors.push(ValidationError::BackupCount);
    }

    if config.timer.ticks == 0 {
        errors.push(ValidationError::Ticks);
    }
    if config.timer.interval_ms == 0 {
        errors.push(ValidationError::Interval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.logging.level = "loud".into();
        config.logging.max_bytes = 0;
        config.timer.ticks = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::MaxBytes));
        assert!(errors.contains(&ValidationError::Ticks));
    }

    #[test]
    fn rejects_zero_backup_count() {
        let mut config = AppConfig::default();
        config.logging.backup_count = 0;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::BackupCount]
        );
    }
}
