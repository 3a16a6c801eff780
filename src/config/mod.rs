use crate::constants::{self, env_vars, retry};
use crate::error::AppError;
use crate::sdk::api::BulkFileFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Client configuration.
///
/// A value of this type is captured by `SwcClient::new` and never re-read
/// while a request (or its retries) is in flight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SwcConfig {
    /// Base URL of the API, e.g. `http://0.0.0.0:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Enable retry with exponential backoff for transient failures.
    #[serde(default = "default_backoff")]
    pub backoff: bool,
    /// Retries attempted after the first failure when `backoff` is enabled.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds.
    #[serde(default = "default_base_delay_ms")]
    pub backoff_base_delay_ms: u64,
    /// Ceiling for any single backoff delay, in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub backoff_max_delay_ms: u64,
    /// Format requested from the bulk export endpoints.
    #[serde(default)]
    pub bulk_file_format: BulkFileFormat,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_backoff() -> bool {
    true
}

fn default_max_retries() -> u32 {
    retry::DEFAULT_MAX_RETRIES
}

fn default_base_delay_ms() -> u64 {
    retry::DEFAULT_BASE_DELAY_MS
}

fn default_max_delay_ms() -> u64 {
    retry::DEFAULT_MAX_DELAY_MS
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for SwcConfig {
    fn default() -> Self {
        SwcConfig {
            base_url: default_base_url(),
            backoff: default_backoff(),
            max_retries: default_max_retries(),
            backoff_base_delay_ms: default_base_delay_ms(),
            backoff_max_delay_ms: default_max_delay_ms(),
            bulk_file_format: BulkFileFormat::default(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl SwcConfig {
    /// Configuration pointing at `base_url` with every other option defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        SwcConfig {
            base_url: base_url.into(),
            ..SwcConfig::default()
        }
    }

    pub fn with_backoff(mut self, backoff: bool) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.backoff_base_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.backoff_max_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_bulk_file_format(mut self, format: BulkFileFormat) -> Self {
        self.bulk_file_format = format;
        self
    }

    pub fn with_http_timeout(mut self, seconds: u64) -> Self {
        self.http_timeout_seconds = seconds;
        self
    }

    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SWC_API_BASE_URL` - Override base URL
    /// - `SWC_BACKOFF` - Enable/disable backoff (`true`/`false`)
    /// - `SWC_MAX_RETRIES` - Override retry count
    /// - `SWC_BACKOFF_BASE_DELAY_MS` - Override first backoff delay
    /// - `SWC_BACKOFF_MAX_DELAY_MS` - Override the per-delay ceiling
    /// - `SWC_BULK_FILE_FORMAT` - `csv` or `parquet`
    /// - `SWC_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `SWC_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(SwcConfig)` - Validated configuration
    /// * `Err(AppError)` - Unreadable file, bad override value or failed validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            SwcConfig::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Builds configuration from defaults and environment variables only.
    ///
    /// Synchronous counterpart of [`SwcConfig::load`] that ignores the config file.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = SwcConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `SWC_*` environment variables on top of the current values.
    ///
    /// Unparsable values are rejected instead of silently ignored.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.base_url = base_url;
        }

        if let Ok(backoff) = std::env::var(env_vars::BACKOFF) {
            self.backoff = parse_bool(env_vars::BACKOFF, &backoff)?;
        }

        if let Ok(max_retries) = std::env::var(env_vars::MAX_RETRIES) {
            self.max_retries = parse_number(env_vars::MAX_RETRIES, &max_retries)?;
        }

        if let Ok(delay) = std::env::var(env_vars::BACKOFF_BASE_DELAY_MS) {
            self.backoff_base_delay_ms = parse_number(env_vars::BACKOFF_BASE_DELAY_MS, &delay)?;
        }

        if let Ok(delay) = std::env::var(env_vars::BACKOFF_MAX_DELAY_MS) {
            self.backoff_max_delay_ms = parse_number(env_vars::BACKOFF_MAX_DELAY_MS, &delay)?;
        }

        if let Ok(format) = std::env::var(env_vars::BULK_FILE_FORMAT) {
            self.bulk_file_format = format.parse()?;
        }

        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds = parse_number(env_vars::HTTP_TIMEOUT, &timeout)?;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", config.base_url);
        println!("────────────────────────────────────");
        println!("Backoff:");
        if config.backoff {
            println!(
                "enabled ({} retries, {} ms base delay, {} ms ceiling)",
                config.max_retries, config.backoff_base_delay_ms, config.backoff_max_delay_ms
            );
        } else {
            println!("disabled");
        }
        println!("────────────────────────────────────");
        println!("Bulk File Format:");
        println!("{}", config.bulk_file_format);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&SwcConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: SwcConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Short alias used by the CLI.
pub type Config = SwcConfig;

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config_error(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value.trim().parse::<T>().map_err(|_| {
        AppError::config_error(format!("{name} must be a non-negative integer, got '{value}'"))
    })
}
