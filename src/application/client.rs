/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Authenticated client for the dashboard API
//!
//! Every call goes through [`HttpClient::request`], which:
//! - adds `Content-Type: application/json` unless the body is form-encoded
//! - adds `Authorization: Bearer <access>` when a token is stored
//! - lets caller headers override both
//! - on a `401`, refreshes the access token once and retries once
//! - when the refresh fails, clears credentials, redirects to the login page
//!   and fails with [`AppError::SessionExpired`]
//!
//! Any other status is handed back untouched, body unread.

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::resource::ResourceService;
use crate::application::navigator::{LoggingNavigator, Navigator};
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::TokenPair;
use crate::model::endpoints::{EndpointArgs, find_endpoint, resource_path};
use crate::model::http::{
    FormData, RequestOptions, RequestState, build_headers, make_http_request, read_json,
};
use crate::storage::{CredentialStore, FileCredentialStore};
use crate::utils::config::join_url;
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, debug, debug_span, error, warn};

/// Client for the dashboard API with transparent token refresh
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - API settings
    /// * `store` - Where the tokens live
    /// * `navigator` - Receives the login redirect when the session is lost
    pub fn new(
        config: Config,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        let auth = Arc::new(Auth::new(
            config.clone(),
            http_client.clone(),
            store,
            rate_limiter.clone(),
        ));

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
            navigator,
        })
    }

    /// Creates a client persisting tokens to the configured file and logging redirects
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store = Arc::new(FileCredentialStore::new(&config.storage.credentials_path));
        Self::new(config, store, Arc::new(LoggingNavigator))
    }

    /// Sends `options` to `path`, recovering once from an expired access token
    ///
    /// # Returns
    /// * `Ok(Response)` - The first non-401 response, or the retry's response
    /// * `Err(AppError::SessionExpired)` - The refresh failed; credentials were
    ///   cleared and the user redirected to the login page
    /// * `Err(AppError::Transport)` - Network failure, not retried
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Response, AppError> {
        let url = join_url(&self.config.rest_api.base_url, path);
        let span = debug_span!("request", id = %request_id(), method = %options.method, path);

        self.run_request(&url, &options).instrument(span).await
    }

    async fn run_request(&self, url: &str, options: &RequestOptions) -> Result<Response, AppError> {
        let mut access = self.auth.access_token()?;
        let mut state = RequestState::Issuing;

        loop {
            state = match state {
                RequestState::Issuing | RequestState::Retrying => {
                    let response = self.send(url, options, access.as_deref()).await?;
                    match state.on_response(response.status()) {
                        RequestState::Refreshing => {
                            warn!("Access token rejected, refreshing and retrying");
                            RequestState::Refreshing
                        }
                        _ => return Ok(response),
                    }
                }
                RequestState::Refreshing => {
                    match self.auth.refresh_after_unauthorized(access.as_deref()).await {
                        Ok(token) => {
                            access = Some(token);
                            state.on_refresh(true)
                        }
                        Err(e) => {
                            warn!("Token refresh failed: {}", e);
                            state.on_refresh(false)
                        }
                    }
                }
                // Done is returned from directly; only LoggedOut leaves the loop
                RequestState::Done | RequestState::LoggedOut => break,
            };
        }

        self.expire_session();
        Err(AppError::SessionExpired)
    }

    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
        access_token: Option<&str>,
    ) -> Result<Response, AppError> {
        let headers = build_headers(access_token, options.is_form_encoded(), &options.headers)?;

        make_http_request(
            &self.http_client,
            &self.rate_limiter,
            options.method.clone(),
            url,
            headers,
            &options.query,
            options.body.as_ref(),
        )
        .await
    }

    fn expire_session(&self) {
        if let Err(e) = self.auth.logout() {
            error!("Failed to clear credentials: {}", e);
        }
        self.navigator.redirect(&self.config.login_path);
    }

    /// Makes a GET request, appending `params` as the query string when non-empty
    pub async fn get<K, V>(&self, path: &str, params: &[(K, V)]) -> Result<Response, AppError>
    where
        K: AsRef<str>,
        V: ToString,
    {
        self.request(path, RequestOptions::new(Method::GET).with_query(params))
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::POST).with_json(body)?)
            .await
    }

    /// Makes a POST request with a multipart body
    pub async fn post_form(&self, path: &str, form: FormData) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::POST).with_form(form))
            .await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::PUT).with_json(body)?)
            .await
    }

    /// Makes a PUT request with a multipart body
    pub async fn put_form(&self, path: &str, form: FormData) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::PUT).with_form(form))
            .await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::PATCH).with_json(body)?)
            .await
    }

    /// Makes a PATCH request with a multipart body
    pub async fn patch_form(&self, path: &str, form: FormData) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::PATCH).with_form(form))
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response, AppError> {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    /// Calls an entry of the named endpoint table
    ///
    /// ```ignore
    /// let response = client
    ///     .call_endpoint("get_order", EndpointArgs::new().id(42))
    ///     .await?;
    /// ```
    pub async fn call_endpoint(
        &self,
        name: &str,
        args: EndpointArgs,
    ) -> Result<Response, AppError> {
        let endpoint = find_endpoint(name)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown endpoint: {name}")))?;
        let path = endpoint.resolve(args.id.as_deref())?;

        let mut options = RequestOptions::new(endpoint.method.into()).with_query(&args.query);
        if let Some(body) = args.body {
            options = options.with_body(body);
        }

        self.request(&path, options).await
    }

    /// GET request whose successful body is deserialized
    ///
    /// Non-success statuses become [`AppError::Unexpected`].
    pub async fn get_json<T, K, V>(&self, path: &str, params: &[(K, V)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: ToString,
    {
        let response = self.get(path, params).await?;
        self.parse_response(response).await
    }

    /// JSON request whose successful body is deserialized
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(path, RequestOptions::new(method).with_json(body)?)
            .await?;
        self.parse_response(response).await
    }

    /// Checks the status and deserializes the body
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }
        read_json(response).await
    }

    /// Exchanges the stored refresh token for a new access token
    pub async fn refresh_token(&self) -> Result<String, AppError> {
        self.auth.refresh_token().await
    }

    /// Logs in and stores the issued tokens
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        self.auth.login(username, password).await
    }

    /// Logs in with the credentials from the configuration
    pub async fn login_from_config(&self) -> Result<TokenPair, AppError> {
        match (
            self.config.credentials.username.as_deref(),
            self.config.credentials.password.as_deref(),
        ) {
            (Some(username), Some(password)) => self.auth.login(username, password).await,
            _ => Err(AppError::InvalidInput(
                "DASHBOARD_USERNAME and DASHBOARD_PASSWORD must be set".to_string(),
            )),
        }
    }

    /// Clears the stored tokens and profile
    pub fn logout(&self) -> Result<(), AppError> {
        self.auth.logout()
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl ResourceService for HttpClient {
    async fn get_resource(
        &self,
        collection: &str,
        id: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Response, AppError> {
        self.get(&resource_path(collection, id), params).await
    }

    async fn create_resource(&self, collection: &str, body: &Value) -> Result<Response, AppError> {
        self.post(&resource_path(collection, None), body).await
    }

    async fn create_resource_form(
        &self,
        collection: &str,
        form: FormData,
    ) -> Result<Response, AppError> {
        self.post_form(&resource_path(collection, None), form).await
    }

    async fn update_resource(
        &self,
        collection: &str,
        id: &str,
        body: &Value,
    ) -> Result<Response, AppError> {
        self.put(&resource_path(collection, Some(id)), body).await
    }

    async fn patch_resource(
        &self,
        collection: &str,
        id: &str,
        body: &Value,
    ) -> Result<Response, AppError> {
        self.patch(&resource_path(collection, Some(id)), body).await
    }

    async fn delete_resource(&self, collection: &str, id: &str) -> Result<Response, AppError> {
        self.delete(&resource_path(collection, Some(id))).await
    }
}
