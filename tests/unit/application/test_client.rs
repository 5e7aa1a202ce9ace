use dashboard_client::application::client::HttpClient;
use dashboard_client::application::config::Config;
use dashboard_client::application::navigator::RecordingNavigator;
use dashboard_client::error::AppError;
use dashboard_client::model::endpoints::EndpointArgs;
use dashboard_client::storage::MemoryCredentialStore;
use std::sync::Arc;

fn make_client() -> HttpClient {
    HttpClient::new(
        Config::with_base_url("http://127.0.0.1:9"),
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(RecordingNavigator::new()),
    )
    .expect("client should build")
}

#[test]
fn client_from_config_builds() {
    let mut config = Config::with_base_url("http://127.0.0.1:9");
    let dir = tempfile::tempdir().unwrap();
    config.storage.credentials_path = dir
        .path()
        .join("credentials.json")
        .to_string_lossy()
        .into_owned();

    let client = HttpClient::from_config(config).expect("client should build");
    assert!(!client.auth().is_authenticated().unwrap());
    assert_eq!(client.config().login_path, "/login");
}

#[tokio::test]
async fn call_endpoint_unknown_name_is_invalid_input() {
    let client = make_client();
    let err = client
        .call_endpoint("get_unicorns", EndpointArgs::new())
        .await
        .unwrap_err();
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("get_unicorns")),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn call_endpoint_missing_id_is_invalid_input() {
    let client = make_client();
    let err = client
        .call_endpoint("delete_order", EndpointArgs::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn login_from_config_requires_credentials() {
    let client = make_client();
    let err = client.login_from_config().await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
