//! Expense record and request shapes

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Expense record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Expense {
    pub id: i32,
    pub number: i32,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body accepted by create and update.
///
/// Echoed back verbatim as the `result` of both operations; generated
/// fields are never included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExpenseInput {
    pub number: i32,
    pub description: String,
}

/// Result payload of the total endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotal {
    pub total_expense: i64,
}

impl ExpenseTotal {
    /// An empty table sums to NULL; that reads as zero.
    pub fn from_sum(sum: Option<i64>) -> Self {
        Self {
            total_expense: sum.unwrap_or(0),
        }
    }
}
