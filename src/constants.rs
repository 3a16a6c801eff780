//! Application-wide constants and configuration defaults
//!
//! This module centralizes the magic numbers used by the client, the
//! configuration layer and the CLI.

/// Default base URL of the SportsWorldCentral API
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8000";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("swc_client/", env!("CARGO_PKG_VERSION"));

/// Retry and backoff defaults
pub mod retry {
    /// Retries attempted after the first failure when backoff is enabled
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Delay before the first retry in milliseconds
    pub const DEFAULT_BASE_DELAY_MS: u64 = 250;

    /// Ceiling for a single backoff delay in milliseconds
    pub const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

    /// Growth factor between consecutive delays
    pub const BACKOFF_FACTOR: u32 = 2;

    /// Upper bound on `max_retries` accepted by config validation
    pub const MAX_ALLOWED_RETRIES: u32 = 20;
}

/// Pagination defaults for list endpoints
pub mod pagination {
    /// Default `skip` query parameter
    pub const DEFAULT_SKIP: u32 = 0;

    /// Default `limit` query parameter, matching the server default
    pub const DEFAULT_LIMIT: u32 = 100;
}

/// API paths
pub mod paths {
    pub const HEALTH_CHECK: &str = "/";
    pub const LEAGUES: &str = "/v0/leagues";
    pub const TEAMS: &str = "/v0/teams";
    pub const PLAYERS: &str = "/v0/players";
    /// The server registers performances with a trailing slash.
    pub const PERFORMANCES: &str = "/v0/performances/";
    pub const COUNTS: &str = "/v0/counts";
    pub const BULK: &str = "/v0/bulk";
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const BASE_URL: &str = "SWC_API_BASE_URL";
    pub const BACKOFF: &str = "SWC_BACKOFF";
    pub const MAX_RETRIES: &str = "SWC_MAX_RETRIES";
    pub const BACKOFF_BASE_DELAY_MS: &str = "SWC_BACKOFF_BASE_DELAY_MS";
    pub const BACKOFF_MAX_DELAY_MS: &str = "SWC_BACKOFF_MAX_DELAY_MS";
    pub const BULK_FILE_FORMAT: &str = "SWC_BULK_FILE_FORMAT";
    pub const HTTP_TIMEOUT: &str = "SWC_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "SWC_LOG_FILE";
}

/// Number of characters of a response body echoed into debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;

/// Number of characters of a response body echoed into error logs
pub const ERROR_PREVIEW_CHARS: usize = 200;

/// Default log file name
pub const LOG_FILE_NAME: &str = "swc_client.log";
