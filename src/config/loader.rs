//! Configuration file loading with precedence handling.

use crate::model::{ClockMode, TimeValue};
use crate::state::history::DEFAULT_RECENT_CAPACITY;
use crate::state::search::{DEFAULT_MIN_QUERY_LEN, EngineSettings};
use crate::state::wheel::{DEFAULT_ROW_HEIGHT, MAX_ROW_HEIGHT};
use crate::state::ScreenSettings;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WLFORM_CONFIG";

/// Environment variable overriding the clock mode (`12h` / `24h`).
pub const TIME_MODE_ENV_VAR: &str = "WLFORM_TIME_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/worklog-form/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Clock mode: `"12h"` or `"24h"`.
    #[serde(default)]
    pub time_mode: Option<ClockMode>,

    /// Initial start time, canonical `HH:MM`.
    #[serde(default)]
    pub default_start: Option<String>,

    /// Initial end time, canonical `HH:MM`.
    #[serde(default)]
    pub default_end: Option<String>,

    /// Number of distinct recent selections kept.
    #[serde(default)]
    pub recent_capacity: Option<usize>,

    /// Queries must be longer than this to open the dropdown.
    #[serde(default)]
    pub min_query_len: Option<usize>,

    /// Wheel row height used for scroll offsets.
    #[serde(default)]
    pub row_height: Option<u32>,

    /// JSON file with the candidate list.
    #[serde(default)]
    pub source_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub time_mode: ClockMode,
    pub default_start: TimeValue,
    pub default_end: TimeValue,
    pub recent_capacity: usize,
    pub min_query_len: usize,
    pub row_height: u32,
    pub source_path: Option<PathBuf>,
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            time_mode: ClockMode::TwelveHour,
            default_start: TimeValue::clamped(8, 0),
            default_end: TimeValue::clamped(17, 0),
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            row_height: DEFAULT_ROW_HEIGHT,
            source_path: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Screen construction parameters for this configuration.
    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            mode: self.time_mode,
            default_start: Some(self.default_start),
            default_end: Some(self.default_end),
            row_height: self.row_height,
            engine: EngineSettings {
                recent_capacity: self.recent_capacity,
                min_query_len: self.min_query_len,
            },
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/worklog-form/wlform.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("worklog-form").join("wlform.log")
    } else {
        PathBuf::from("wlform.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("worklog-form").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `WLFORM_CONFIG` environment variable
/// 3. Default path `~/.config/worklog-form/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a configured time. Malformed input goes through the lenient parser.
fn resolve_time(raw: Option<String>, default: TimeValue, key: &str) -> TimeValue {
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse::<TimeValue>() {
        Ok(time) => time,
        Err(err) => {
            let lenient = TimeValue::parse_lenient(&raw);
            warn!(key, value = %raw, error = %err, using = %lenient, "malformed time in config");
            lenient
        }
    }
}

/// Clamp a configured row height into `1..=MAX_ROW_HEIGHT`.
fn resolve_row_height(raw: Option<u32>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    let clamped = raw.clamp(1, MAX_ROW_HEIGHT);
    if clamped != raw {
        warn!(value = raw, using = clamped, "row_height out of range in config");
    }
    clamped
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        time_mode: config.time_mode.unwrap_or(defaults.time_mode),
        default_start: resolve_time(config.default_start, defaults.default_start, "default_start"),
        default_end: resolve_time(config.default_end, defaults.default_end, "default_end"),
        recent_capacity: config.recent_capacity.unwrap_or(defaults.recent_capacity),
        min_query_len: config.min_query_len.unwrap_or(defaults.min_query_len),
        row_height: resolve_row_height(config.row_height, defaults.row_height),
        source_path: config.source_path.or(defaults.source_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `WLFORM_TIME_MODE`: Override clock mode (ignored if unrecognized)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(TIME_MODE_ENV_VAR) {
        match ClockMode::from_config_str(&raw) {
            Some(mode) => config.time_mode = mode,
            None => warn!(value = %raw, keeping = %config.time_mode, "unrecognized time mode override"),
        }
    }

    config
}

/// CLI-level overrides; `None` means "flag not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub time_mode: Option<ClockMode>,
    pub default_start: Option<TimeValue>,
    pub default_end: Option<TimeValue>,
    pub source_path: Option<PathBuf>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(mode) = overrides.time_mode {
        config.time_mode = mode;
    }
    if let Some(start) = overrides.default_start {
        config.default_start = start;
    }
    if let Some(end) = overrides.default_end {
        config.default_end = end;
    }
    if let Some(path) = overrides.source_path {
        config.source_path = Some(path);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
