use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// Application error, mapped onto an HTTP status and a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request was syntactically fine but semantically unusable (400).
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    /// Requested resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Unexpected failure inside the service (500).
    #[error("{message}")]
    Internal {
        message: String,
        details: Option<Value>,
    },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details: None,
        }
    }

    pub fn internal_with_details(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details: Some(details),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal_error",
        }
    }

    fn details(&self) -> Option<&Value> {
        match self {
            Self::Validation { details, .. } | Self::Internal { details, .. } => details.as_ref(),
            Self::NotFound { .. } => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details: self.details().cloned(),
            },
        };
        (status, Json(body)).into_response()
    }
}
