//! Repository implementations for database access

pub mod expenses;

pub use expenses::ExpenseRepo;

/// Database error type
///
/// Every store failure collapses into this one kind; callers only get the
/// store's message text.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Message suitable for the `reason` field of a failure response.
    ///
    /// Server-side errors report PostgreSQL's own message; client-side
    /// failures (pool timeout, I/O) report the driver's description.
    pub fn reason(&self) -> String {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.message().to_string(),
            Self::Sqlx(e) => e.to_string(),
        }
    }
}
