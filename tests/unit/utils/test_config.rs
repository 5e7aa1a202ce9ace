use dashboard_client::utils::config::{
    get_env_or_default, get_env_or_none, join_url, normalize_base_url,
};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("DC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("DC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("DC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("DC_MISSING_VAR");
    }
    let result: String = get_env_or_default("DC_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("DC_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("DC_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("DC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_bool() {
    unsafe {
        env::set_var("DC_TEST_VAR_BOOL", "false");
        let result: bool = get_env_or_default("DC_TEST_VAR_BOOL", true);
        assert!(!result);
        env::remove_var("DC_TEST_VAR_BOOL");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("DC_TEST_VAR_OPTION", "123");
        let present: Option<u32> = get_env_or_none("DC_TEST_VAR_OPTION");
        assert_eq!(present, Some(123));

        env::set_var("DC_TEST_VAR_OPTION", "abc");
        let invalid: Option<u32> = get_env_or_none("DC_TEST_VAR_OPTION");
        assert_eq!(invalid, None);

        env::remove_var("DC_TEST_VAR_OPTION");
        let missing: Option<u32> = get_env_or_none("DC_TEST_VAR_OPTION");
        assert_eq!(missing, None);
    }
}

#[test]
fn test_normalize_base_url() {
    assert_eq!(normalize_base_url("http://api.local/api"), "http://api.local/api");
    assert_eq!(normalize_base_url("http://api.local/api///"), "http://api.local/api");
    assert_eq!(normalize_base_url("  http://api.local  "), "http://api.local");
}

#[test]
fn test_join_url() {
    assert_eq!(join_url("http://api.local/api", "/orders/"), "http://api.local/api/orders/");
    assert_eq!(join_url("http://api.local/api/", "orders/"), "http://api.local/api/orders/");
    assert_eq!(
        join_url("http://api.local/api", "https://cdn.local/export.csv"),
        "https://cdn.local/export.csv"
    );
}
