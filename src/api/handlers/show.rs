use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /show` dumps the whole token-to-URL mapping as a JSON object.
pub async fn show_handler(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let links = state.link_service.list_all().await?;
    Ok(Json(links))
}
