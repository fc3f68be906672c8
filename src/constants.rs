//! Application-wide constants and configuration values

/// Default API domain. Paths from the endpoint selector are appended to it.
pub const DEFAULT_API_DOMAIN: &str = "https://ergast.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of raw response bodies kept in the HTTP response cache
pub const HTTP_RESPONSE_CACHE_CAPACITY: usize = 100;

/// First season of the Formula 1 world championship
pub const FIRST_SEASON: u16 = 1950;

/// Application name used for config and log directories
pub const APP_NAME: &str = "f1_ergast";

/// Default log file name
pub const LOG_FILE_NAME: &str = "f1_ergast.log";

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// Finished seasons never change
    pub const HISTORICAL_SEASON_SECONDS: u64 = 86400;

    /// Queries spanning all seasons, and the season list itself
    pub const ALL_SEASONS_SECONDS: u64 = 3600;

    /// The running season, updated after every race weekend
    pub const CURRENT_SEASON_SECONDS: u64 = 300;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "ERGAST_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "ERGAST_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "ERGAST_HTTP_TIMEOUT";
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff between retries (milliseconds), doubled on each attempt
    pub const BASE_DELAY_MS: u64 = 250;

    /// Upper bound on a server-supplied `Retry-After` wait (seconds)
    pub const MAX_RETRY_AFTER_SECONDS: u64 = 30;
}
