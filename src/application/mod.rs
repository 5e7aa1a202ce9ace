/// Login, logout and token refresh
pub mod auth;
/// Authenticated HTTP client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
/// Redirect collaborator used on forced logout
pub mod navigator;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
