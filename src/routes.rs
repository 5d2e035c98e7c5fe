//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Plain-text greeting
//! - `POST /shorten`  - Shorten a URL submitted as form data
//! - `GET  /show`     - JSON dump of every stored token/URL pair
//! - `GET  /{token}`  - Redirect to the URL stored under `token`
//!
//! Requests to a known path with the wrong method get `405`; anything else
//! falls through to a JSON `404`.

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{home_handler, redirect_handler, shorten_handler, show_handler};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/shorten/` reaches the
/// same handler as `/shorten`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/show", get(show_handler))
        .route("/{token}", get(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn fallback_handler() -> AppError {
    AppError::not_found("Resource not found")
}
