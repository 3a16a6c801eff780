use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Terminal HTTP outcomes
    #[error("API resource not found (404): {url}")]
    NotFound { url: String },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Transient outcomes, retried by the request layer
    #[error("API transient server error ({status}): {message} (URL: {url})")]
    TransientServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Request to {url} failed after {attempts} attempt(s): {cause}")]
    RequestFailed {
        url: String,
        attempts: u32,
        status: Option<u16>,
        cause: String,
    },

    // Decoding
    #[error("API returned a malformed response: {message} (URL: {url})")]
    MalformedResponse { message: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a not found error (404)
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Create a client error (4xx status codes except 404 and 429)
    pub fn client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a transient server error (5xx and 429 status codes)
    pub fn transient_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::TransientServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a request failed error carrying the last observed status and cause
    pub fn request_failed(
        url: impl Into<String>,
        attempts: u32,
        status: Option<u16>,
        cause: impl Into<String>,
    ) -> Self {
        Self::RequestFailed {
            url: url.into(),
            attempts,
            status,
            cause: cause.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed_response(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if the error is a transient outcome worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::TransientServerError { .. })
    }

    /// Check if error indicates a missing resource (typed miss, not a technical failure)
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    /// HTTP status attached to the error, if one was observed
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::NotFound { .. } => Some(404),
            AppError::ClientError { status, .. }
            | AppError::TransientServerError { status, .. } => Some(*status),
            AppError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Unknown bulk file format");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Unknown bulk file format"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_not_found_helper() {
        let error = AppError::not_found("http://localhost:8000/v0/players/9999");
        assert!(matches!(error, AppError::NotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API resource not found (404): http://localhost:8000/v0/players/9999"
        );
    }

    #[test]
    fn test_client_error_helper() {
        let error = AppError::client_error(422, "Unprocessable Entity", "http://localhost");
        assert!(matches!(error, AppError::ClientError { .. }));
        assert_eq!(
            error.to_string(),
            "API client error (422): Unprocessable Entity (URL: http://localhost)"
        );
    }

    #[test]
    fn test_transient_server_error_helper() {
        let error =
            AppError::transient_server_error(503, "Service Unavailable", "http://localhost");
        assert!(matches!(error, AppError::TransientServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API transient server error (503): Service Unavailable (URL: http://localhost)"
        );
    }

    #[test]
    fn test_request_failed_helper() {
        let error = AppError::request_failed(
            "http://localhost/v0/leagues",
            4,
            Some(500),
            "Internal Server Error",
        );
        assert!(matches!(
            error,
            AppError::RequestFailed {
                attempts: 4,
                status: Some(500),
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "Request to http://localhost/v0/leagues failed after 4 attempt(s): Internal Server Error"
        );
    }

    #[test]
    fn test_malformed_response_helper() {
        let error = AppError::malformed_response("missing field `league_id`", "http://localhost");
        assert!(matches!(error, AppError::MalformedResponse { .. }));
        assert_eq!(
            error.to_string(),
            "API returned a malformed response: missing field `league_id` (URL: http://localhost)"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(AppError::transient_server_error(500, "message", "url").is_retryable());
        assert!(AppError::transient_server_error(429, "message", "url").is_retryable());

        assert!(!AppError::not_found("url").is_retryable());
        assert!(!AppError::client_error(400, "message", "url").is_retryable());
        assert!(!AppError::malformed_response("message", "url").is_retryable());
        assert!(!AppError::config_error("message").is_retryable());
        // Retries are already exhausted once this is surfaced
        assert!(!AppError::request_failed("url", 4, Some(500), "message").is_retryable());
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::not_found("url").is_not_found());

        assert!(!AppError::client_error(400, "message", "url").is_not_found());
        assert!(!AppError::request_failed("url", 1, Some(500), "message").is_not_found());
        assert!(!AppError::malformed_response("message", "url").is_not_found());
    }

    #[test]
    fn test_status() {
        assert_eq!(AppError::not_found("url").status(), Some(404));
        assert_eq!(
            AppError::client_error(401, "message", "url").status(),
            Some(401)
        );
        assert_eq!(
            AppError::request_failed("url", 1, None, "connection refused").status(),
            None
        );
        assert_eq!(AppError::config_error("message").status(), None);
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::Http(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<toml::Table>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::not_found("http://localhost"),
            AppError::client_error(400, "client error", "http://localhost"),
            AppError::transient_server_error(500, "server error", "http://localhost"),
            AppError::request_failed("http://localhost", 2, None, "connection reset"),
            AppError::malformed_response("bad json", "http://localhost"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
