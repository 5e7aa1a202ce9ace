/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Authentication module for the dashboard API
//!
//! This module handles:
//! - Login against `POST /token/`
//! - Access token refresh against `POST /token/refresh/`
//! - Logout and the cached user profile
//!
//! Refreshes are serialized. A caller whose request failed with an access
//! token that another caller has already replaced reuses the stored token
//! instead of refreshing a second time.

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{TOKEN_PATH, TOKEN_REFRESH_PATH};
use crate::error::AppError;
use crate::model::auth::{
    LoginRequest, RefreshRequest, RefreshResponse, StoredCredentials, TokenPair,
};
use crate::model::http::{RequestBody, build_headers, make_http_request, read_json};
use crate::storage::CredentialStore;
use crate::utils::config::join_url;
use chrono::Utc;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Authentication manager for the dashboard API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    store: Arc<dyn CredentialStore>,
    rate_limiter: RateLimiter,
    refresh_gate: Mutex<()>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - API settings
    /// * `client` - Transport shared with the request client
    /// * `store` - Where tokens are persisted
    /// * `rate_limiter` - Throttle shared with the request client
    pub fn new(
        config: Arc<Config>,
        client: Client,
        store: Arc<dyn CredentialStore>,
        rate_limiter: RateLimiter,
    ) -> Self {
        Self {
            config,
            client,
            store,
            rate_limiter,
            refresh_gate: Mutex::new(()),
        }
    }

    /// Stored access token, if any
    pub fn access_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.store.read()?.access)
    }

    /// True when an access token is stored
    pub fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.access_token()?.is_some())
    }

    /// Exchanges username and password for a token pair and stores it
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The issued tokens, already persisted
    /// * `Err(AppError::Unauthorized)` - The backend rejected the login
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let url = join_url(&self.config.rest_api.base_url, TOKEN_PATH);
        let body = RequestBody::json(&LoginRequest { username, password })?;

        debug!("Sending login request to: {}", url);

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::POST,
            &url,
            build_headers(None, false, &HeaderMap::new())?,
            &[],
            Some(&body),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Unauthorized);
        }

        let pair: TokenPair = read_json(response).await?;
        self.store.write(&StoredCredentials::from_pair(&pair))?;

        info!("✓ Login successful for {}", username);
        Ok(pair)
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token, already persisted
    /// * `Err(AppError::NoRefreshToken)` - Nothing to refresh with; no network call was made
    /// * `Err(AppError::RefreshRejected)` - The refresh endpoint answered non-2xx
    pub async fn refresh_token(&self) -> Result<String, AppError> {
        let _gate = self.refresh_gate.lock().await;
        let current = self.store.read()?;
        self.exchange_refresh_token(current).await
    }

    /// Refresh performed after a request carrying `rejected` got a 401
    ///
    /// If the stored access token is no longer `rejected`, a concurrent caller
    /// already refreshed it and it is returned without a network call.
    pub async fn refresh_after_unauthorized(
        &self,
        rejected: Option<&str>,
    ) -> Result<String, AppError> {
        let _gate = self.refresh_gate.lock().await;
        let current = self.store.read()?;

        if let Some(access) = current.access.as_deref() {
            if Some(access) != rejected {
                debug!("Access token already refreshed by a concurrent request");
                return Ok(access.to_string());
            }
        }

        self.exchange_refresh_token(current).await
    }

    async fn exchange_refresh_token(
        &self,
        mut current: StoredCredentials,
    ) -> Result<String, AppError> {
        let Some(refresh) = current.refresh.clone() else {
            warn!("No refresh token stored");
            return Err(AppError::NoRefreshToken);
        };

        let url = join_url(&self.config.rest_api.base_url, TOKEN_REFRESH_PATH);
        let body = RequestBody::json(&RefreshRequest { refresh: &refresh })?;

        debug!("Refreshing access token at: {}", url);

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::POST,
            &url,
            build_headers(None, false, &HeaderMap::new())?,
            &[],
            Some(&body),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Token refresh rejected with status {}", status);
            return Err(AppError::RefreshRejected(status));
        }

        let refreshed: RefreshResponse = read_json(response).await?;
        current.apply_refresh(&refreshed);
        self.store.write(&current)?;

        info!("✓ Access token refreshed");
        Ok(refreshed.access)
    }

    /// Cached profile of the logged-in user
    pub fn user_data(&self) -> Result<Option<Value>, AppError> {
        Ok(self.store.read()?.user_data)
    }

    /// Caches the profile of the logged-in user next to the tokens
    pub fn set_user_data(&self, user_data: Value) -> Result<(), AppError> {
        let mut current = self.store.read()?;
        current.user_data = Some(user_data);
        current.updated_at = Some(Utc::now());
        self.store.write(&current)
    }

    /// Removes the tokens and the cached profile
    pub fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.store.clear()?;
        info!("✓ Logged out successfully");
        Ok(())
    }
}
