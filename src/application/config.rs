use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CREDENTIALS_PATH, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS,
    LOGIN_PATH,
};
use crate::utils::config::{get_env_or_default, get_env_or_none, normalize_base_url};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Optional login used by tools that authenticate without a user prompt
pub struct Credentials {
    /// Dashboard username
    pub username: Option<String>,
    /// Dashboard password
    pub password: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the dashboard API client
pub struct Config {
    /// Optional login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Credential persistence configuration
    pub storage: StorageConfig,
    /// Outbound rate limiting configuration
    pub rate_limiter: RateLimiterConfig,
    /// Page the user is redirected to when the session cannot be recovered
    pub login_path: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// API origin every relative path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for persisted credentials
pub struct StorageConfig {
    /// JSON file holding the `access`, `refresh` and `user_data` entries
    pub credentials_path: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting outbound requests
pub struct RateLimiterConfig {
    /// Whether outbound requests are throttled at all
    pub enabled: bool,
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Throttling is opt-in; the other values apply once it is enabled
impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DASHBOARD_API_BASE_URL` | `http://localhost:8000/api` |
    /// | `DASHBOARD_REST_TIMEOUT` | `30` |
    /// | `DASHBOARD_USERNAME` / `DASHBOARD_PASSWORD` | unset |
    /// | `DASHBOARD_CREDENTIALS_PATH` | `.dashboard/credentials.json` |
    /// | `DASHBOARD_LOGIN_PATH` | `/login` |
    /// | `DASHBOARD_RATE_LIMIT_ENABLED` | `false` |
    /// | `DASHBOARD_RATE_LIMIT_MAX_REQUESTS` | `120` |
    /// | `DASHBOARD_RATE_LIMIT_PERIOD_SECONDS` | `60` |
    /// | `DASHBOARD_RATE_LIMIT_BURST_SIZE` | `20` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                username: get_env_or_none("DASHBOARD_USERNAME"),
                password: get_env_or_none("DASHBOARD_PASSWORD"),
            },
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&get_env_or_default(
                    "DASHBOARD_API_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                )),
                timeout: get_env_or_default("DASHBOARD_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                credentials_path: get_env_or_default(
                    "DASHBOARD_CREDENTIALS_PATH",
                    String::from(DEFAULT_CREDENTIALS_PATH),
                ),
            },
            rate_limiter: RateLimiterConfig {
                enabled: get_env_or_default("DASHBOARD_RATE_LIMIT_ENABLED", false),
                max_requests: get_env_or_default(
                    "DASHBOARD_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "DASHBOARD_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "DASHBOARD_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            login_path: get_env_or_default("DASHBOARD_LOGIN_PATH", String::from(LOGIN_PATH)),
        }
    }

    /// Builds a configuration pointing at `base_url` without reading the environment
    ///
    /// Used by tests and by embedders that carry their own settings.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: normalize_base_url(base_url),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            storage: StorageConfig {
                credentials_path: String::from(DEFAULT_CREDENTIALS_PATH),
            },
            rate_limiter: RateLimiterConfig::default(),
            login_path: String::from(LOGIN_PATH),
        }
    }
}
