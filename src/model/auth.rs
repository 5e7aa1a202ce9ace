/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials persisted between requests
///
/// Field names match the storage keys used by the dashboard (`access`,
/// `refresh`, `user_data`). Every entry is optional: a fresh install has none,
/// and a session may hold an access token whose refresh token was lost.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StoredCredentials {
    /// Short-lived bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Long-lived token exchanged for a new access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    /// Cached profile of the logged-in user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Value>,
    /// When the entry was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoredCredentials {
    /// Credentials holding a freshly issued token pair
    #[must_use]
    pub fn from_pair(pair: &TokenPair) -> Self {
        Self {
            access: Some(pair.access.clone()),
            refresh: Some(pair.refresh.clone()),
            user_data: None,
            updated_at: Some(Utc::now()),
        }
    }

    /// True when nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none() && self.user_data.is_none()
    }

    /// Replaces the access token, and the refresh token when the server rotated it
    pub fn apply_refresh(&mut self, refreshed: &RefreshResponse) {
        self.access = Some(refreshed.access.clone());
        if let Some(refresh) = &refreshed.refresh {
            self.refresh = Some(refresh.clone());
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Access + refresh pair issued by `POST /token/`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Access token
    pub access: String,
    /// Refresh token
    pub refresh: String,
}

/// Body of `POST /token/`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// Dashboard username
    pub username: &'a str,
    /// Dashboard password
    pub password: &'a str,
}

/// Body of `POST /token/refresh/`
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    /// Stored refresh token
    pub refresh: &'a str,
}

/// Response of `POST /token/refresh/`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
    /// Present only when the backend rotates refresh tokens
    #[serde(default)]
    pub refresh: Option<String>,
}
