//! Shared state handed to server functions as a request extension.

use std::sync::Arc;
use subtrack_account::{AccountBackend, PasswordResetService, RateLimitConfig};

/// Everything a server function needs to reach the account layer.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AccountBackend>,
    pub password_reset: PasswordResetService,
}

impl AppState {
    /// Builds the state around `backend`, sharing it with the reset service.
    pub fn new(backend: Arc<dyn AccountBackend>, reset_limits: RateLimitConfig) -> Self {
        let password_reset = PasswordResetService::new(Arc::clone(&backend), reset_limits);
        Self {
            backend,
            password_reset,
        }
    }
}
