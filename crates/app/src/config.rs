//! Environment-driven configuration for the `clockshop` binary.

use std::path::PathBuf;

use clockshop_domain::{Clock, DomainError};
use thiserror::Error;

const INPUT_VAR: &str = "CLOCKSHOP_INPUT";
const OUTPUT_VAR: &str = "CLOCKSHOP_OUTPUT";
const STAMP_VAR: &str = "CLOCKSHOP_STAMP_NOW";
const FIND_VAR: &str = "CLOCKSHOP_FIND";
const LOG_VAR: &str = "CLOCKSHOP_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A boolean variable has an unrecognised value.
    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool {
        /// The variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A clock variable does not hold a valid `H:M:S` time.
    #[error("{var} must be a clock in H:M:S form: {source}")]
    InvalidClock {
        /// The variable name.
        var: &'static str,
        /// Why the clock was rejected.
        source: DomainError,
    },
}

/// Runtime settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Clock file to load.
    pub input: PathBuf,
    /// Where to write the sorted clocks, if anywhere.
    pub output: Option<PathBuf>,
    /// Whether to append the current time before sorting.
    pub stamp_now: bool,
    /// A clock to look up in the sorted result.
    pub find: Option<Clock>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let input = present(INPUT_VAR)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(INPUT_VAR))?;
        let output = present(OUTPUT_VAR).map(PathBuf::from);
        let stamp_now = present(STAMP_VAR)
            .map(|value| parse_bool(STAMP_VAR, &value))
            .transpose()?
            .unwrap_or(false);
        let find = present(FIND_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<Clock>()
                    .map_err(|source| ConfigError::InvalidClock {
                        var: FIND_VAR,
                        source,
                    })
            })
            .transpose()?;
        let log_filter = present(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            input,
            output,
            stamp_now,
            find,
            log_filter,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
