/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! # Dashboard Client
//!
//! Authenticated REST client for the distribution dashboard API.
//!
//! Every dashboard screen (inventory, orders, points of sale, mobile vendors,
//! users and roles, reports) talks to the same JSON backend through
//! [`HttpClient`](application::client::HttpClient). The client:
//!
//! - injects the bearer access token held by a [`CredentialStore`](storage::CredentialStore)
//! - refreshes an expired access token once and retries the failed request once
//! - clears credentials and redirects to the login page when the session cannot be recovered
//!
//! Outbound throttling is off unless `DASHBOARD_RATE_LIMIT_ENABLED=true`.
//!
//! ## Example
//!
//! ```ignore
//! use dashboard_client::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Config::new();
//! let store = Arc::new(FileCredentialStore::new(&config.storage.credentials_path));
//! let client = HttpClient::new(config, store, Arc::new(LoggingNavigator))?;
//!
//! client.login("admin", "secret").await?;
//! let response = client.get("/orders/", &[("status", "pending")]).await?;
//! ```

/// Client, authentication, configuration and rate limiting
pub mod application;

/// Fixed paths, storage keys and defaults
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// Request descriptors, auth payloads and the named endpoint table
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Persisted credential storage
pub mod storage;

/// Environment, logging and id helpers
pub mod utils;

/// Crate version as declared in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
