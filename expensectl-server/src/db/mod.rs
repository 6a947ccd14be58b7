//! Database layer - connection pool, schema and repositories
//!
//! - Every physical connection runs the schema initializer once on connect
//! - User-supplied values are always bound parameters
//! - Store errors are surfaced as-is, no retries

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
