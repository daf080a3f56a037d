//! Rate limiting for password-reset requests.
//!
//! Fixed windows per key. The key is the normalized email address, so a
//! flood of resets for one address is cut off without affecting anyone
//! else.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Rate limit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Window duration in seconds.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u32,
}

fn default_max_requests() -> u32 {
    3
}

fn default_window_seconds() -> u32 {
    900
}

impl RateLimitConfig {
    /// Creates a new rate limit configuration.
    #[must_use]
    pub fn new(max_requests: u32, window_seconds: u32) -> Self {
        Self {
            max_requests,
            window_seconds,
        }
    }

    fn window(&self) -> Duration {
        Duration::seconds(i64::from(self.window_seconds))
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new(default_max_requests(), default_window_seconds())
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Request is allowed.
    Allowed {
        remaining: u32,
        resets_at: DateTime<Utc>,
    },
    /// Rate limit exceeded.
    Exceeded {
        retry_after: Duration,
        resets_at: DateTime<Utc>,
    },
}

impl RateLimitResult {
    /// Returns the number of remaining requests (0 if exceeded).
    #[must_use]
    pub fn remaining(&self) -> u32 {
        match self {
            Self::Allowed { remaining, .. } => *remaining,
            Self::Exceeded { .. } => 0,
        }
    }
}

#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    window_start: DateTime<Utc>,
}

/// A keyed fixed-window rate limiter. Clones share state.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Arc<RwLock<HashMap<String, WindowState>>>,
}

impl RateLimiter {
    /// Creates a new rate limiter with the given configuration.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Checks if a request is allowed for the given key.
    ///
    /// If allowed, increments the request count.
    pub fn check_and_increment(&self, key: &str) -> RateLimitResult {
        self.check_and_increment_at(key, Utc::now())
    }

    /// [`check_and_increment`](Self::check_and_increment) against an explicit clock.
    pub fn check_and_increment_at(&self, key: &str, now: DateTime<Utc>) -> RateLimitResult {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let window_duration = self.config.window();

        let window_state = state.entry(key.to_string()).or_insert(WindowState {
            count: 0,
            window_start: now,
        });

        if now - window_state.window_start >= window_duration {
            window_state.window_start = now;
            window_state.count = 0;
        }

        let resets_at = window_state.window_start + window_duration;

        if window_state.count >= self.config.max_requests {
            return RateLimitResult::Exceeded {
                retry_after: resets_at - now,
                resets_at,
            };
        }

        window_state.count += 1;
        RateLimitResult::Allowed {
            remaining: self.config.max_requests - window_state.count,
            resets_at,
        }
    }

    /// Drops every window that has fully elapsed. Returns how many were removed.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let window_duration = self.config.window();
        let before = state.len();
        state.retain(|_, w| now - w.window_start < window_duration);
        before - state.len()
    }

    /// Number of keys currently tracked.
    #[must_use]
    pub fn tracked_keys(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
