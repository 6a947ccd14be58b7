//! Schema teardown endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use sqlx::PgPool;

use crate::db::repos::ExpenseRepo;
use crate::http::server::AppState;

/// Drop the expense table, logging and discarding any failure.
///
/// Callers never learn whether the drop happened.
pub async fn destroy_schema_swallowing_errors(pool: &PgPool) {
    match ExpenseRepo::new(pool).destroy().await {
        Ok(()) => tracing::warn!("expense table dropped"),
        Err(err) => tracing::warn!(error = %err, "failed to drop expense table"),
    }
}

/// GET /duarrr - drop the expense table
async fn destroy(State(state): State<Arc<AppState>>) -> &'static str {
    destroy_schema_swallowing_errors(&state.pool).await;
    "destroyed"
}

/// Admin routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/duarrr", get(destroy))
}
