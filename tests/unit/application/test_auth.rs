use dashboard_client::application::auth::Auth;
use dashboard_client::application::config::Config;
use dashboard_client::application::rate_limiter::RateLimiter;
use dashboard_client::error::AppError;
use dashboard_client::model::auth::StoredCredentials;
use dashboard_client::storage::{CredentialStore, MemoryCredentialStore};
use serde_json::json;
use std::sync::Arc;
use tokio_test::block_on;

fn make_auth(store: Arc<MemoryCredentialStore>) -> Auth {
    // Nothing listens here; these tests must never reach the network
    let config = Arc::new(Config::with_base_url("http://127.0.0.1:9"));
    Auth::new(config, reqwest::Client::new(), store, RateLimiter::unlimited())
}

fn stored(access: Option<&str>, refresh: Option<&str>) -> StoredCredentials {
    StoredCredentials {
        access: access.map(String::from),
        refresh: refresh.map(String::from),
        user_data: None,
        updated_at: None,
    }
}

#[test]
fn test_access_token_and_is_authenticated() {
    let store = Arc::new(MemoryCredentialStore::new());
    let auth = make_auth(store.clone());
    assert_eq!(auth.access_token().unwrap(), None);
    assert!(!auth.is_authenticated().unwrap());

    store.write(&stored(Some("A1"), Some("R1"))).unwrap();
    assert_eq!(auth.access_token().unwrap().as_deref(), Some("A1"));
    assert!(auth.is_authenticated().unwrap());
}

#[test]
fn test_refresh_without_refresh_token_fails_before_network() {
    let store = Arc::new(MemoryCredentialStore::with_credentials(stored(Some("A1"), None)));
    let auth = make_auth(store);

    let err = block_on(auth.refresh_token()).unwrap_err();
    assert!(matches!(err, AppError::NoRefreshToken));
}

#[tokio::test]
async fn test_refresh_after_unauthorized_reuses_newer_token() {
    let store = Arc::new(MemoryCredentialStore::with_credentials(stored(Some("A2"), Some("R1"))));
    let auth = make_auth(store);

    // the request failed with A1, but the store already holds A2
    let token = auth.refresh_after_unauthorized(Some("A1")).await.unwrap();
    assert_eq!(token, "A2");
}

#[tokio::test]
async fn test_refresh_after_unauthorized_without_anything_stored() {
    let store = Arc::new(MemoryCredentialStore::new());
    let auth = make_auth(store);

    let err = auth.refresh_after_unauthorized(None).await.unwrap_err();
    assert!(matches!(err, AppError::NoRefreshToken));
}

#[test]
fn test_user_data_is_kept_next_to_tokens() {
    let store = Arc::new(MemoryCredentialStore::with_credentials(stored(Some("A1"), Some("R1"))));
    let auth = make_auth(store.clone());

    auth.set_user_data(json!({"username": "manager", "permissions": ["orders.view"]}))
        .unwrap();

    assert_eq!(
        auth.user_data().unwrap(),
        Some(json!({"username": "manager", "permissions": ["orders.view"]}))
    );
    assert_eq!(store.read().unwrap().access.as_deref(), Some("A1"));
}

#[test]
fn test_logout_clears_everything() {
    let store = Arc::new(MemoryCredentialStore::with_credentials(stored(Some("A1"), Some("R1"))));
    let auth = make_auth(store.clone());
    auth.set_user_data(json!({"id": 1})).unwrap();

    auth.logout().unwrap();

    assert!(store.read().unwrap().is_empty());
}
