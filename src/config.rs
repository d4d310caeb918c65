//! Configuration management for the phone book.
//!
//! Settings come from environment variables (optionally from a `.env` file)
//! and can be overridden by command-line flags in the binary.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Audit log directory when `PHONEBOOK_LOG_DIR` is unset.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Allowed printer column widths.
pub const COLUMN_WIDTH_RANGE: RangeInclusive<usize> = 8..=80;

/// Configuration for the phone book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to seed contacts from (default: none)
    pub contacts_file: Option<PathBuf>,

    /// Width of each printed table column except the id (default: 20)
    pub column_width: usize,

    /// Log level for stderr output (default: "error")
    pub log_level: String,

    /// Directory for the rotating audit log (default: "logs")
    pub log_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_CONTACTS_FILE`: CSV file to seed contacts from
    /// - `PHONEBOOK_COLUMN_WIDTH`: printer column width (default: 20)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `PHONEBOOK_LOG_DIR`: audit log directory (default: "logs")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy does not print to stdout.
        let _ = dotenvy::dotenv();

        let contacts_file = env::var("PHONEBOOK_CONTACTS_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let column_width = Self::parse_env_usize("PHONEBOOK_COLUMN_WIDTH", 20)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let log_dir = env::var("PHONEBOOK_LOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from);

        let config = Config {
            contacts_file,
            column_width,
            log_level,
            log_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges; also used after command-line overrides.
    pub fn validate(&self) -> ConfigResult<()> {
        if !COLUMN_WIDTH_RANGE.contains(&self.column_width) {
            return Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_COLUMN_WIDTH".to_string(),
                reason: format!(
                    "Must be between {} and {}, got: {}",
                    COLUMN_WIDTH_RANGE.start(),
                    COLUMN_WIDTH_RANGE.end(),
                    self.column_width
                ),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: None,
            column_width: 20,
            log_level: "error".to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}
