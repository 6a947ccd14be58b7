//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is lazy:
//! physical connections are opened on first use, so the server starts even
//! while the store is unreachable and requests fail until it comes back.
//! Each new connection runs the schema initializer before it is handed out.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::schema;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool with default limits.
///
/// # Example
///
/// ```ignore
/// let options = StoreConfig::default().connect_options()?;
/// let pool = create_pool(options);
/// ```
pub fn create_pool(options: PgConnectOptions) -> PgPool {
    create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS)
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `options` - PostgreSQL connection options
/// * `max_connections` - Maximum number of connections in the pool
pub fn create_pool_with_options(options: PgConnectOptions, max_connections: u32) -> PgPool {
    pool_options(max_connections).connect_lazy_with(options)
}

/// Pool options with the schema initializer installed as the connect hook.
///
/// A failing initializer is logged and the connection is still handed out;
/// queries against the missing table then fail on their own.
pub fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                if let Err(err) = schema::ensure_expense_table(&mut *conn).await {
                    tracing::error!(error = %err, "failed to ensure expense table");
                }
                Ok(())
            })
        })
}

/// Pool that gives up on acquiring a connection after `timeout`.
///
/// Used by tests that exercise the error paths without a running store.
#[cfg(test)]
pub(crate) fn unreachable_pool(timeout: std::time::Duration) -> PgPool {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("nobody")
        .database("nowhere");

    pool_options(1)
        .acquire_timeout(timeout)
        .connect_lazy_with(options)
}
