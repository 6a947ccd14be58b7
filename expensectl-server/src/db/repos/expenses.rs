//! Expense repository
//!
//! One statement per operation, all values bound:
//! - list/total: plain SELECTs, store-native order
//! - insert/update: timestamps come from the store's NOW()
//! - update/delete: a missing id is zero rows affected, not an error

use sqlx::PgPool;

use super::DbError;
use crate::db::schema;
use crate::models::{Expense, ExpenseInput};

/// Expense repository
pub struct ExpenseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExpenseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every expense row.
    pub async fn list(&self) -> Result<Vec<Expense>, DbError> {
        let rows: Vec<Expense> = sqlx::query_as(
            "SELECT id, number, description, created_at, updated_at FROM expense",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Sum of `number` across all rows, `None` when the table is empty.
    pub async fn total(&self) -> Result<Option<i64>, DbError> {
        let (sum,): (Option<i64>,) = sqlx::query_as("SELECT SUM(number) FROM expense")
            .fetch_one(self.pool)
            .await?;

        Ok(sum)
    }

    /// Insert a new expense; `created_at` and `updated_at` share one NOW().
    pub async fn insert(&self, input: &ExpenseInput) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO expense (number, description, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            "#,
        )
        .bind(input.number)
        .bind(&input.description)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Rewrite `number` and `description` and refresh `updated_at`.
    ///
    /// Returns the number of rows affected (0 or 1).
    pub async fn update(&self, id: i32, input: &ExpenseInput) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE expense
            SET number = $1, description = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(input.number)
        .bind(&input.description)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete an expense by id (idempotent).
    ///
    /// Returns the number of rows affected (0 or 1).
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM expense WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Drop the whole expense table.
    pub async fn destroy(&self) -> Result<(), DbError> {
        schema::drop_expense_table(self.pool).await?;
        Ok(())
    }
}
