//! Custom Axum extractors
//!
//! Both reject with [`ApiError`] so malformed input gets the same failure
//! envelope as a store error.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::Json;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor that rejects with the failure envelope
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// Extract an integer expense id from the path
pub struct ExpenseId(pub i32);

impl<S> FromRequestParts<S> for ExpenseId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        let id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| ApiError::bad_request(format!("invalid expense id: \"{}\"", raw)))?;

        Ok(Self(id))
    }
}
