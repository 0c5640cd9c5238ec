//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    default_log_path, resolve_config, CliOverrides, ConfigError, ConfigFile, ResolvedConfig,
    DEFAULT_SITE_URL,
};
