//! Expense endpoints
//!
//! Create and update echo the submitted body; update and delete answer the
//! same way whether or not the id existed.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

use crate::db::repos::ExpenseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ExpenseId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Envelope, Expense, ExpenseInput, ExpenseTotal};

/// GET /expense/all - list every expense
async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Expense>>>, ApiError> {
    let rows = ExpenseRepo::new(&state.pool).list().await?;
    Ok(Json(Envelope::ok(rows)))
}

/// GET /expense/total - sum of all amounts
async fn total_expense(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<ExpenseTotal>>, ApiError> {
    let sum = ExpenseRepo::new(&state.pool).total().await?;
    Ok(Json(Envelope::ok(ExpenseTotal::from_sum(sum))))
}

/// POST /expense - create an expense
async fn create_expense(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<ExpenseInput>,
) -> Result<Json<Envelope<ExpenseInput>>, ApiError> {
    ExpenseRepo::new(&state.pool).insert(&input).await?;
    Ok(Json(Envelope::ok(input)))
}

/// PUT /expense/{id} - rewrite an expense
async fn update_expense(
    State(state): State<Arc<AppState>>,
    ExpenseId(id): ExpenseId,
    ValidJson(input): ValidJson<ExpenseInput>,
) -> Result<Json<Envelope<ExpenseInput>>, ApiError> {
    let affected = ExpenseRepo::new(&state.pool).update(id, &input).await?;
    tracing::debug!(id, affected, "expense updated");
    Ok(Json(Envelope::ok(input)))
}

/// DELETE /expense/{id} - remove an expense
async fn delete_expense(
    State(state): State<Arc<AppState>>,
    ExpenseId(id): ExpenseId,
) -> Result<Json<Envelope<String>>, ApiError> {
    let affected = ExpenseRepo::new(&state.pool).delete(id).await?;
    tracing::debug!(id, affected, "expense deleted");
    Ok(Json(Envelope::ok(format!("User deleted with ID: {}", id))))
}

/// Expense routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expense/all", get(list_expenses))
        .route("/expense/total", get(total_expense))
        .route("/expense", post(create_expense))
        .route("/expense/{id}", put(update_expense).delete(delete_expense))
}
