//! Navigation collaborator
//!
//! When a session cannot be recovered the dashboard sends the user to its
//! login page. The client only knows the path; whatever shell embeds it
//! (desktop window, terminal UI, web view) performs the navigation.

use std::sync::Mutex;
use tracing::warn;

/// Performs a full-page navigation
pub trait Navigator: Send + Sync {
    /// Navigates to `path`
    fn redirect(&self, path: &str);
}

/// Navigator that only records the redirect in the logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, path: &str) {
        warn!("Session expired, redirecting to {}", path);
    }
}

/// Navigator that remembers every redirect, for embedders that poll instead of reacting
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Navigator with no recorded redirects
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths navigated to, oldest first
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Most recent redirect, if any
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        warn!("Session expired, redirecting to {}", path);
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}
