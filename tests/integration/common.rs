// Common utilities for integration tests

use dashboard_client::prelude::*;
use std::sync::Arc;

/// Client wired to a mock server with inspectable collaborators
pub struct TestClient {
    pub client: HttpClient,
    pub store: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Configuration pointing at `url`, without throttling
pub fn test_config(url: &str) -> Config {
    let mut config = Config::with_base_url(url);
    config.rate_limiter.enabled = false;
    config
}

/// Stored credentials with the given tokens
pub fn stored(access: Option<&str>, refresh: Option<&str>) -> StoredCredentials {
    StoredCredentials {
        access: access.map(String::from),
        refresh: refresh.map(String::from),
        user_data: Some(serde_json::json!({"username": "manager"})),
        updated_at: None,
    }
}

/// Creates a client for `url` whose store starts with `credentials`
pub fn create_test_client(url: &str, credentials: StoredCredentials) -> TestClient {
    setup_logger();

    let store = Arc::new(MemoryCredentialStore::with_credentials(credentials));
    let navigator = Arc::new(RecordingNavigator::new());
    let client = HttpClient::new(test_config(url), store.clone(), navigator.clone())
        .expect("Failed to create client");

    TestClient {
        client,
        store,
        navigator,
    }
}
