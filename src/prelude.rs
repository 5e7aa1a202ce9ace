/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! # Dashboard Client Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use dashboard_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api");
//! assert_eq!(config.rest_api.base_url, "http://localhost:8000/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the dashboard API client
pub use crate::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, StorageConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Authentication manager
pub use crate::application::auth::Auth;

/// Authenticated HTTP client
pub use crate::application::client::HttpClient;

/// REST resource interface
pub use crate::application::interfaces::resource::ResourceService;

/// Login redirect collaborator
pub use crate::application::navigator::{LoggingNavigator, Navigator, RecordingNavigator};

/// Outbound request throttle
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// MODELS
// ============================================================================

/// Token and credential models
pub use crate::model::auth::{RefreshResponse, StoredCredentials, TokenPair};

/// Named endpoints
pub use crate::model::endpoints::{Endpoint, EndpointArgs, EndpointMethod, ENDPOINTS, find_endpoint, resource_path};

/// Request descriptors
pub use crate::model::http::{FormData, NO_PARAMS, RequestBody, RequestOptions, RequestState};

// ============================================================================
// STORAGE AND UTILITIES
// ============================================================================

/// Credential stores
pub use crate::storage::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// Request correlation ids
pub use crate::utils::id::request_id;

/// HTTP types used in signatures
pub use reqwest::{Method, Response, StatusCode};
