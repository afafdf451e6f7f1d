// Runtime settings for the terminal planner.
// Defaults are overridden by `TASK_PLANNER_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// UI poll interval used when nothing else is configured.
pub const DEFAULT_TICK_MS: u64 = 250;

pub const ENV_TICK_MS: &str = "TASK_PLANNER_TICK_MS";
pub const ENV_LOG_FILE: &str = "TASK_PLANNER_LOG_FILE";
pub const ENV_SAMPLE_TASKS: &str = "TASK_PLANNER_SAMPLE_TASKS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_rate: Duration,
    // Where tracing output goes; `None` keeps logging off.
    pub log_file: Option<PathBuf>,
    // Start with the three sample tasks instead of an empty list.
    pub sample_tasks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            log_file: None,
            sample_tasks: true,
        }
    }
}

impl Config {
    // Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    // Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(val) = lookup(ENV_TICK_MS) {
            let millis: u64 = val.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TICK_MS,
                value: val.clone(),
                reason: "expected a number of milliseconds",
            })?;
            if millis == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_TICK_MS,
                    value: val,
                    reason: "must be greater than zero",
                });
            }
            config.tick_rate = Duration::from_millis(millis);
        }
        if let Some(val) = lookup(ENV_LOG_FILE) {
            if !val.trim().is_empty() {
                config.log_file = Some(PathBuf::from(val));
            }
        }
        if let Some(val) = lookup(ENV_SAMPLE_TASKS) {
            config.sample_tasks = parse_flag(ENV_SAMPLE_TASKS, &val)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: val.to_string(),
            reason: "expected true or false",
        }),
    }
}
