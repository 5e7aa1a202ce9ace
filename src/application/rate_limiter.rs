/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Client-side throttle for outbound API requests
//!
//! Dashboard screens fire many requests on mount; the limiter keeps a single
//! client from flooding the backend. Token bucket from the `governor` crate.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter shared by every request issued through one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Option<Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// A disabled configuration, or one with zero requests per period, yields
    /// a limiter that never waits.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let Some(max_requests) = NonZeroU32::new(config.max_requests) else {
            return Self::unlimited();
        };
        if !config.enabled || config.period_seconds == 0 {
            return Self::unlimited();
        }

        let replenish = Duration::from_secs(config.period_seconds) / max_requests.get();
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(max_requests);

        let limiter = Quota::with_period(replenish)
            .map(|quota| GovernorRateLimiter::direct(quota.allow_burst(burst_size)));

        Self {
            limiter: limiter.map(Arc::new),
        }
    }

    /// A limiter that lets every request through
    #[must_use]
    pub fn unlimited() -> Self {
        Self { limiter: None }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Checks if a request can be made immediately, consuming a slot when it can
    #[must_use]
    pub fn check(&self) -> bool {
        match &self.limiter {
            Some(limiter) => limiter.check().is_ok(),
            None => true,
        }
    }

    /// Whether this limiter throttles at all
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
