use assert_json_diff::assert_json_eq;
use dashboard_client::model::auth::{
    LoginRequest, RefreshRequest, RefreshResponse, StoredCredentials, TokenPair,
};
use serde_json::json;

#[test]
fn test_stored_credentials_default_is_empty() {
    let creds = StoredCredentials::default();
    assert!(creds.is_empty());
    assert_eq!(serde_json::to_value(&creds).unwrap(), json!({}));
}

#[test]
fn test_stored_credentials_from_pair() {
    let pair = TokenPair {
        access: "A1".to_string(),
        refresh: "R1".to_string(),
    };
    let creds = StoredCredentials::from_pair(&pair);

    assert_eq!(creds.access.as_deref(), Some("A1"));
    assert_eq!(creds.refresh.as_deref(), Some("R1"));
    assert!(creds.user_data.is_none());
    assert!(creds.updated_at.is_some());
}

#[test]
fn test_stored_credentials_keys() {
    let creds = StoredCredentials {
        access: Some("A1".to_string()),
        refresh: Some("R1".to_string()),
        user_data: Some(json!({"username": "vendor01"})),
        updated_at: None,
    };

    assert_json_eq!(
        serde_json::to_value(&creds).unwrap(),
        json!({
            "access": "A1",
            "refresh": "R1",
            "user_data": {"username": "vendor01"}
        })
    );
}

#[test]
fn test_stored_credentials_tolerates_missing_keys() {
    let creds: StoredCredentials = serde_json::from_str(r#"{"access": "A1"}"#).unwrap();
    assert_eq!(creds.access.as_deref(), Some("A1"));
    assert!(creds.refresh.is_none());
    assert!(!creds.is_empty());
}

#[test]
fn test_apply_refresh_keeps_refresh_token_unless_rotated() {
    let mut creds = StoredCredentials {
        access: Some("A1".to_string()),
        refresh: Some("R1".to_string()),
        user_data: Some(json!({"id": 1})),
        updated_at: None,
    };

    creds.apply_refresh(&RefreshResponse {
        access: "A2".to_string(),
        refresh: None,
    });
    assert_eq!(creds.access.as_deref(), Some("A2"));
    assert_eq!(creds.refresh.as_deref(), Some("R1"));
    assert_eq!(creds.user_data, Some(json!({"id": 1})));

    creds.apply_refresh(&RefreshResponse {
        access: "A3".to_string(),
        refresh: Some("R2".to_string()),
    });
    assert_eq!(creds.access.as_deref(), Some("A3"));
    assert_eq!(creds.refresh.as_deref(), Some("R2"));
}

#[test]
fn test_refresh_response_without_rotation() {
    let response: RefreshResponse = serde_json::from_str(r#"{"access": "A2"}"#).unwrap();
    assert_eq!(response.access, "A2");
    assert!(response.refresh.is_none());
}

#[test]
fn test_auth_request_payloads() {
    let login = LoginRequest {
        username: "admin",
        password: "secret",
    };
    assert_json_eq!(
        serde_json::to_value(&login).unwrap(),
        json!({"username": "admin", "password": "secret"})
    );

    let refresh = RefreshRequest { refresh: "R1" };
    assert_json_eq!(serde_json::to_value(&refresh).unwrap(), json!({"refresh": "R1"}));
}
