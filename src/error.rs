/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Error type for the dashboard client
//!
//! A `401` on the first attempt is recovered inside the client and never shows
//! up here. Other non-success statuses are not errors for
//! [`HttpClient::request`](crate::application::client::HttpClient::request);
//! they only become [`AppError::Unexpected`] through the JSON convenience helpers.

use reqwest::StatusCode;
use std::fmt;

/// Main error type of the crate
#[derive(Debug)]
pub enum AppError {
    /// Network level failure: DNS, refused connection, timeout, TLS
    Transport(reqwest::Error),
    /// The session could not be recovered; credentials were cleared and the
    /// user was sent to the login page
    SessionExpired,
    /// A token refresh was attempted with no refresh token stored
    NoRefreshToken,
    /// The refresh endpoint answered with a non-success status
    RefreshRejected(StatusCode),
    /// Login was rejected by the token endpoint
    Unauthorized,
    /// Non-success status surfaced by a JSON convenience helper
    Unexpected(StatusCode),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Filesystem failure in a credential store
    Io(std::io::Error),
    /// Invalid argument supplied by the caller
    InvalidInput(String),
    /// Credential store failure that is not an I/O error
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::SessionExpired => write!(f, "session expired"),
            AppError::NoRefreshToken => write!(f, "no refresh token stored"),
            AppError::RefreshRejected(status) => write!(f, "token refresh rejected: {status}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// True when the failure ends the session (the caller should show the login page)
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::SessionExpired)
    }

    /// True for failures raised by the refresh step itself
    #[must_use]
    pub fn is_refresh_failure(&self) -> bool {
        matches!(self, AppError::NoRefreshToken | AppError::RefreshRejected(_))
    }
}
