//! Configuration file loading with precedence handling.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest).

use crate::client::DEFAULT_API_URL;
use crate::state::Theme;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Site URL used in sitemap entries when nothing is configured.
pub const DEFAULT_SITE_URL: &str = "https://globalscholarships.com";

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "SCHOLAR_CONFIG";
/// Environment variable overriding `api_url`.
pub const ENV_API_URL: &str = "SCHOLAR_API_URL";
/// Environment variable overriding `news_url`.
pub const ENV_NEWS_URL: &str = "SCHOLAR_NEWS_URL";
/// Environment variable overriding `site_url`.
pub const ENV_SITE_URL: &str = "SCHOLAR_SITE_URL";
/// Environment variable overriding `theme`.
pub const ENV_THEME: &str = "SCHOLAR_THEME";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A recognised key holds a value outside its domain.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Key or environment variable name.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/scholar/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the scholarship API.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Full URL of the news headlines endpoint.
    #[serde(default)]
    pub news_url: Option<String>,

    /// Public site URL used in sitemap entries.
    #[serde(default)]
    pub site_url: Option<String>,

    /// "dark" or "light".
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Scholarship API base URL.
    pub api_url: String,
    /// `None` disables the news section.
    pub news_url: Option<String>,
    /// Public site URL for sitemap entries.
    pub site_url: String,
    /// Initial colour theme.
    pub theme: Theme,
    /// Log file written by the tracing subscriber.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            news_url: None,
            site_url: DEFAULT_SITE_URL.to_string(),
            theme: Theme::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/scholar/scholar.log` on Linux, or the platform state
/// directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("scholar").join("scholar.log")
    } else {
        PathBuf::from("scholar.log")
    }
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

/// Resolve default config file path: `~/.config/scholar/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scholar").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SCHOLAR_CONFIG` environment variable
/// 3. Default path `~/.config/scholar/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(format!("{} is empty", ENV_CONFIG)));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn parse_theme(key: &str, raw: &str) -> Result<Theme, ConfigError> {
    raw.parse::<Theme>().map_err(|reason| ConfigError::InvalidValue {
        key: key.to_string(),
        reason,
    })
}

/// Non-empty trimmed value, or `None`.
fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unknown theme name.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let theme = match config.theme {
        Some(raw) => parse_theme("theme", &raw)?,
        None => defaults.theme,
    };

    Ok(ResolvedConfig {
        api_url: config.api_url.and_then(non_empty).unwrap_or(defaults.api_url),
        news_url: config.news_url.and_then(non_empty).or(defaults.news_url),
        site_url: config.site_url.and_then(non_empty).unwrap_or(defaults.site_url),
        theme,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `SCHOLAR_API_URL`, `SCHOLAR_NEWS_URL`, `SCHOLAR_SITE_URL` and
/// `SCHOLAR_THEME`. Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Some(url) = std::env::var(ENV_API_URL).ok().and_then(non_empty) {
        config.api_url = url;
    }
    if let Some(url) = std::env::var(ENV_NEWS_URL).ok().and_then(non_empty) {
        config.news_url = Some(url);
    }
    if let Some(url) = std::env::var(ENV_SITE_URL).ok().and_then(non_empty) {
        config.site_url = url;
    }
    if let Some(theme) = std::env::var(ENV_THEME).ok().and_then(non_empty) {
        config.theme = parse_theme(ENV_THEME, &theme)?;
    }
    Ok(config)
}

/// CLI flags that override configuration. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url`.
    pub api_url: Option<String>,
    /// `--news-url`.
    pub news_url: Option<String>,
    /// `sitemap --site-url`.
    pub site_url: Option<String>,
    /// `--theme`.
    pub theme: Option<Theme>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(url) = overrides.api_url.and_then(non_empty) {
        config.api_url = url;
    }
    if let Some(url) = overrides.news_url.and_then(non_empty) {
        config.news_url = Some(url);
    }
    if let Some(url) = overrides.site_url.and_then(non_empty) {
        config.site_url = url;
    }
    if let Some(theme) = overrides.theme {
        config.theme = theme;
    }
    config
}

/// Run the whole chain: file → env → CLI.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    let with_env = apply_env_overrides(merged)?;
    Ok(apply_cli_overrides(with_env, overrides))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
