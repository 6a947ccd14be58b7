//! Image upload endpoint

use std::io;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Envelope;

/// Multipart field carrying the file
pub const UPLOAD_FIELD: &str = "img";

/// Largest accepted request body for uploads (32 MiB)
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// POST /img - store the `img` file under its derived name
async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::bad_request("multipart field 'img' has no filename"))?;

        let contents = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {}", e)))?;

        let path = state
            .uploads
            .save(&original_name, &contents)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::InvalidInput => ApiError::bad_request(e.to_string()),
                _ => ApiError::Upload(e),
            })?;

        tracing::info!(
            original = %original_name,
            stored = %path.display(),
            bytes = contents.len(),
            "image uploaded"
        );
        return Ok(Json(Envelope::empty()));
    }

    Err(ApiError::bad_request("missing multipart field 'img'"))
}

/// Upload routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/img", post(upload_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
