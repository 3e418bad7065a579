pub(crate) mod drinks;
pub(crate) mod health;

use crate::errors::ApiError;
use crate::state::AppState;
use axum::Router;

/// Combines all API routes into a single router
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(drinks::router())
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
}

/// Unmatched paths render the uniform 404 envelope
async fn not_found_fallback() -> ApiError {
    ApiError::not_found()
}

/// Known paths hit with the wrong method render the 405 envelope
async fn method_not_allowed_fallback() -> ApiError {
    ApiError::method_not_allowed()
}
