//! API error types with IntoResponse
//!
//! Every error renders as `{"success": false, "reason": "..."}`. Store
//! failures of any kind share status 400; clients only see the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::models::Failure;

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Store operation failed (400, store message passed through)
    Store(DbError),

    /// Request did not match the expected shape (400)
    BadRequest { reason: String },

    /// Upload could not be written (500, logged)
    Upload(std::io::Error),
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            Self::Store(e) => e.reason(),
            Self::BadRequest { reason } => reason.clone(),
            Self::Upload(e) => format!("failed to store upload: {}", e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(e) => tracing::warn!("Store error: {}", e),
            Self::BadRequest { reason } => tracing::debug!("Rejected request: {}", reason),
            Self::Upload(e) => tracing::error!("Upload error: {}", e),
        }

        (self.status(), Json(Failure::new(self.reason()))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Store(e)
    }
}
