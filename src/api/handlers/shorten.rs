use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::{Form, Json};
use serde_json::json;

use crate::api::dto::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /shorten` derives a token for the submitted URL and stores the
/// mapping.
///
/// The extractor result is taken as a `Result` so a body that cannot be
/// parsed at all surfaces as an internal error, while a parseable body
/// without a `url` field is a validation error.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::internal_with_details(
            "Failed to parse form data",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let url = form
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::validation("Missing 'url' parameter"))?;

    let token = state.link_service.shorten(&url).await?;

    Ok(Json(ShortenResponse { short_url: token }))
}
