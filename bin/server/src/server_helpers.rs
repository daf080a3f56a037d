//! Helper functions for server functions with proper error handling and logging.

use crate::error::FormError;
use crate::state::AppState;
use axum::Extension;
use std::sync::Arc;

/// Extracts the shared [`AppState`] attached to the request by the router.
///
/// Logs the extraction failure and returns a user-safe error type.
pub async fn get_app_state() -> Result<Arc<AppState>, FormError> {
    leptos_axum::extract::<Extension<Arc<AppState>>>()
        .await
        .map(|Extension(state)| state)
        .map_err(|e| {
            tracing::error!(error = %e, "Application state missing from request");
            FormError::StateMissing {
                details: e.to_string(),
            }
        })
}
