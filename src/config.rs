//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `STROKESENSE_LOG_MODE` | `stderr` (`file` writes to `STROKESENSE_LOG_FILE`) |
//! | `STROKESENSE_LOG_FILE` | `strokesense.log` |
//! | `STROKESENSE_SIMULATED_LATENCY_MS` | `0` |
//!
//! Stdout is reserved for the assessment report, so logs never go there.

use std::path::PathBuf;
use std::time::Duration;

use crate::{Result, StrokesenseError};

const DEFAULT_LOG_FILE: &str = "strokesense.log";

/// Where formatted log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Stderr,
    File,
}

/// Settings for the `strokesense` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_mode: LogMode,
    pub log_file: PathBuf,

    /// Artificial delay before a result is released. Cosmetic only.
    pub simulated_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_mode: LogMode::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            simulated_latency: Duration::ZERO,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    /// Returns `StrokesenseError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `StrokesenseError::Config` if a variable is set to an invalid value.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup("STROKESENSE_LOG_MODE") {
            config.log_mode = match mode.trim().to_ascii_lowercase().as_str() {
                "" | "stderr" => LogMode::Stderr,
                "file" => LogMode::File,
                other => {
                    return Err(StrokesenseError::Config(format!(
                        "STROKESENSE_LOG_MODE must be 'stderr' or 'file', got '{other}'"
                    )))
                }
            };
        }

        if let Some(path) = lookup("STROKESENSE_LOG_FILE").filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup("STROKESENSE_SIMULATED_LATENCY_MS") {
            let millis = raw.trim().parse::<u64>().map_err(|_| {
                StrokesenseError::Config(format!(
                    "STROKESENSE_SIMULATED_LATENCY_MS must be a whole number of milliseconds, got '{raw}'"
                ))
            })?;
            config.simulated_latency = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
