use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_API_BASE;

/// Configuration for marquee.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (MARQUEE_* prefix)
/// 3. Config file (~/.config/marquee/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the artist catalog service.
    ///
    /// Can be set via:
    /// - CLI: --api-url https://...
    /// - ENV: MARQUEE_API_BASE_URL
    /// - Config: api_base_url = "https://..."
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound in seconds for any single request to the service.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How many location lookups may be in flight at once.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Number of live suggestions shown while typing.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Logger settings handed to twyg. Defaults to `warn` so failed
    /// location lookups are reported.
    #[serde(default = "default_logging")]
    pub logging: twyg::Opts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            suggestion_limit: default_suggestion_limit(),
            logging: default_logging(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/marquee/config.toml
    /// Reads environment variables with MARQUEE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration using an explicit config file location.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("marquee");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom service URL.
    ///
    /// This is used when the --api-url CLI flag is provided.
    pub fn load_with_api_url(api_base_url: String) -> Result<Self> {
        let mut config = Self::load()?;
        config.api_base_url = api_base_url;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Logger settings to install, raised to `debug` when `verbose` is set.
    ///
    /// twyg filters on the level it was set up with, so verbosity has to be
    /// applied here rather than through `log::set_max_level` afterwards.
    pub fn logging_opts(&self, verbose: bool) -> Result<twyg::Opts> {
        if !verbose {
            return Ok(self.logging.clone());
        }
        with_level(&self.logging, twyg::LogLevel::Debug)
    }
}

fn with_level(opts: &twyg::Opts, level: twyg::LogLevel) -> Result<twyg::Opts> {
    twyg::OptsBuilder::new()
        .coloured(opts.coloured())
        .output(opts.output().clone())
        .level(level)
        .report_caller(opts.report_caller())
        .timestamp_format(opts.timestamp_format().clone())
        .pad_level(opts.pad_level())
        .pad_amount(opts.pad_amount())
        .pad_side(opts.pad_side())
        .msg_separator(opts.msg_separator())
        .arrow_char(opts.arrow_char())
        .colors(opts.colors().clone())
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {e:?}"))
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_concurrent_fetches() -> usize {
    16
}

fn default_suggestion_limit() -> usize {
    6
}

fn default_logging() -> twyg::Opts {
    let opts = twyg::Opts::default();
    with_level(&opts, twyg::LogLevel::Warn).unwrap_or(opts)
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/marquee/config.toml
/// - macOS: ~/Library/Application Support/marquee/config.toml
/// - Windows: %APPDATA%\marquee\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Marquee Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (MARQUEE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the artist catalog service
#
# Can also be set via:
# - CLI: marquee --api-url https://example.org/api search queen
# - Environment: MARQUEE_API_BASE_URL=https://example.org/api
api_base_url = "https://groupietrackers.herokuapp.com/api"

# Seconds before a single request to the service is abandoned
request_timeout_secs = 10

# Maximum number of per-artist location lookups in flight at once
max_concurrent_fetches = 16

# Number of live suggestions shown while typing
suggestion_limit = 6

# Logger settings; `marquee --verbose` raises the level to debug
[logging]
level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Create the config file at `config_path` if it doesn't exist.
pub fn ensure_config_file_at(config_path: &std::path::Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_concurrent_fetches, 16);
        assert_eq!(config.suggestion_limit, 6);
        assert_eq!(config.logging.level(), twyg::LogLevel::Warn);
    }

    #[test]
    fn test_verbose_raises_logging_level() {
        let config = Config::default();

        let quiet = config.logging_opts(false).unwrap();
        assert_eq!(quiet.level(), twyg::LogLevel::Warn);

        let verbose = config.logging_opts(true).unwrap();
        assert_eq!(verbose.level(), twyg::LogLevel::Debug);
        assert_eq!(verbose.coloured(), config.logging.coloured());
        assert_eq!(verbose.output(), config.logging.output());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_load_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from(&temp_dir.path().join("missing.toml"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_custom_api_url() {
        let config = Config::load_with_api_url("http://localhost:8080/api".to_string());
        assert!(config.is_ok());
        assert_eq!(config.unwrap().api_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_ensure_config_file_writes_example_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marquee").join("config.toml");

        assert!(ensure_config_file_at(&path).unwrap());
        assert!(!ensure_config_file_at(&path).unwrap());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("api_base_url"));
    }

    #[test]
    fn test_example_config_values_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "suggestion_limit = 3\nrequest_timeout_secs = 4\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.request_timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_example_config_logs_warnings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, example_config()).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level(), twyg::LogLevel::Warn);
    }
}
