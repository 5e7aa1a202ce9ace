/// Default API origin used when `DASHBOARD_API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
/// Endpoint exchanging username/password for an access + refresh pair
pub const TOKEN_PATH: &str = "/token/";
/// Endpoint exchanging a refresh token for a new access token
pub const TOKEN_REFRESH_PATH: &str = "/token/refresh/";
/// Page the user is sent to when the session cannot be recovered
pub const LOGIN_PATH: &str = "/login";
/// Default location of the persisted credentials file
pub const DEFAULT_CREDENTIALS_PATH: &str = ".dashboard/credentials.json";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("dashboard-client/", env!("CARGO_PKG_VERSION"));

/// Storage key of the access token
pub const ACCESS_KEY: &str = "access";
/// Storage key of the refresh token
pub const REFRESH_KEY: &str = "refresh";
/// Storage key of the cached user profile
pub const USER_DATA_KEY: &str = "user_data";

/// Default number of requests allowed per rate limiting period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 120;
/// Default rate limiting period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default number of requests that can be made back to back
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 20;
