//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::{KeyBindings, KeyContext};
pub use loader::{
    CONFIG_ENV_VAR, CliOverrides, ConfigError, ConfigFile, ResolvedConfig, TIME_MODE_ENV_VAR,
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config,
};
