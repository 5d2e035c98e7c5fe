use serde::{Deserialize, Serialize};

/// Form body accepted by `POST /shorten`.
///
/// The field is optional so a missing `url` surfaces as a validation error
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: Option<String>,
}

/// Response body returned by `POST /shorten`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
