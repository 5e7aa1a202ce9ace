use dashboard_client::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, StorageConfig,
};
use dashboard_client::application::rate_limiter::RateLimiter;
use dashboard_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, LOGIN_PATH};
use std::env;

#[test]
fn test_with_base_url_normalizes() {
    let config = Config::with_base_url("http://erp.local/api/");
    assert_eq!(config.rest_api.base_url, "http://erp.local/api");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.login_path, LOGIN_PATH);
    assert!(config.credentials.username.is_none());
}

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("DASHBOARD_API_BASE_URL", "https://erp.example.com/api/");
        env::set_var("DASHBOARD_REST_TIMEOUT", "5");
        env::set_var("DASHBOARD_LOGIN_PATH", "/auth/login");
        env::set_var("DASHBOARD_RATE_LIMIT_ENABLED", "true");
    }

    let config = Config::new();

    unsafe {
        env::remove_var("DASHBOARD_API_BASE_URL");
        env::remove_var("DASHBOARD_REST_TIMEOUT");
        env::remove_var("DASHBOARD_LOGIN_PATH");
        env::remove_var("DASHBOARD_RATE_LIMIT_ENABLED");
    }

    assert_eq!(config.rest_api.base_url, "https://erp.example.com/api");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.login_path, "/auth/login");
    assert!(config.rate_limiter.enabled);
}

#[test]
fn test_default_base_url_is_normalized() {
    assert!(!DEFAULT_BASE_URL.ends_with('/'));
}

#[test]
fn test_config_serialization() {
    let config = Config {
        credentials: Credentials {
            username: Some("manager".to_string()),
            password: None,
        },
        rest_api: RestApiConfig {
            base_url: "https://api.example.com".to_string(),
            timeout: 10,
        },
        storage: StorageConfig {
            credentials_path: "/tmp/creds.json".to_string(),
        },
        rate_limiter: RateLimiterConfig::default(),
        login_path: "/login".to_string(),
    };

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.credentials.username.as_deref(), Some("manager"));
    assert_eq!(deserialized.rest_api.base_url, config.rest_api.base_url);
    assert_eq!(deserialized.storage.credentials_path, "/tmp/creds.json");
    assert!(!deserialized.rate_limiter.enabled);
}

#[test]
fn test_rate_limiter_disabled_by_default() {
    let config = Config::with_base_url("http://localhost:8000/api");
    assert!(!config.rate_limiter.enabled);
    assert!(!RateLimiter::new(&config.rate_limiter).is_enabled());
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_base_url("http://localhost:8000/api");
    let shown = config.to_string();
    assert!(shown.contains("http://localhost:8000/api"));
}
