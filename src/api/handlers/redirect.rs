use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /{token}` redirects to the stored URL with `302 Found`.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&token).await?;

    // `Redirect` only builds 303/307/308 responses, so set the header directly.
    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
