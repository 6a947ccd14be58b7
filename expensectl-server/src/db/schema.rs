//! Expense table definition
//!
//! `ensure_expense_table` is idempotent and runs on every new connection.
//! `drop_expense_table` is irreversible; the table only comes back when the
//! pool opens a fresh connection.

use sqlx::postgres::PgExecutor;

const CREATE_EXPENSE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS expense (
        id SERIAL PRIMARY KEY,
        number INT NOT NULL,
        description VARCHAR(50) NOT NULL,
        created_at TIMESTAMP NOT NULL,
        updated_at TIMESTAMP NOT NULL
    )
"#;

const DROP_EXPENSE_TABLE: &str = "DROP TABLE expense";

/// Create the expense table if it does not exist yet.
pub async fn ensure_expense_table<'e, E>(executor: E) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(CREATE_EXPENSE_TABLE).execute(executor).await?;
    Ok(())
}

/// Drop the expense table and every row in it.
pub async fn drop_expense_table<'e, E>(executor: E) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(DROP_EXPENSE_TABLE).execute(executor).await?;
    Ok(())
}
