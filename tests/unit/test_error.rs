use dashboard_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_session_expired() {
    let error = AppError::SessionExpired;
    assert_eq!(error.to_string(), "session expired");
}

#[test]
fn test_app_error_display_no_refresh_token() {
    let error = AppError::NoRefreshToken;
    assert_eq!(error.to_string(), "no refresh token stored");
}

#[test]
fn test_app_error_display_refresh_rejected() {
    let error = AppError::RefreshRejected(StatusCode::UNAUTHORIZED);
    assert!(error.to_string().contains("401"));
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("endpoint get_order requires an id".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: endpoint get_order requires an id"
    );
}

#[test]
fn test_app_error_display_storage() {
    let error = AppError::Storage("lock poisoned".to_string());
    assert_eq!(error.to_string(), "storage error: lock poisoned");
}

// Note: reqwest::Error cannot be easily constructed in tests
// This conversion is tested through the integration tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match &app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_classification() {
    assert!(AppError::SessionExpired.is_session_expired());
    assert!(!AppError::Unauthorized.is_session_expired());

    assert!(AppError::NoRefreshToken.is_refresh_failure());
    assert!(AppError::RefreshRejected(StatusCode::BAD_REQUEST).is_refresh_failure());
    assert!(!AppError::SessionExpired.is_refresh_failure());
}
