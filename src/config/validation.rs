use crate::config::SwcConfig;
use crate::constants::retry::MAX_ALLOWED_RETRIES;
use crate::error::AppError;
use reqwest::Url;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must be an absolute http(s) URL
/// - `max_retries` is bounded
/// - Backoff ceiling cannot be below the base delay
/// - HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &SwcConfig) -> Result<(), AppError> {
    validate_base_url(&config.base_url)?;

    if config.max_retries > MAX_ALLOWED_RETRIES {
        return Err(AppError::config_error(format!(
            "max_retries must be at most {MAX_ALLOWED_RETRIES}, got {}",
            config.max_retries
        )));
    }

    if config.backoff_max_delay_ms < config.backoff_base_delay_ms {
        return Err(AppError::config_error(format!(
            "backoff_max_delay_ms ({}) cannot be smaller than backoff_base_delay_ms ({})",
            config.backoff_max_delay_ms, config.backoff_base_delay_ms
        )));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Checks that the base URL is an absolute http(s) URL without query or fragment.
pub fn validate_base_url(base_url: &str) -> Result<(), AppError> {
    if base_url.trim().is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    let url = Url::parse(base_url)
        .map_err(|e| AppError::config_error(format!("Invalid base URL '{base_url}': {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::config_error(format!(
            "Base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(AppError::config_error(
            "Base URL cannot contain a query string or fragment",
        ));
    }

    Ok(())
}
