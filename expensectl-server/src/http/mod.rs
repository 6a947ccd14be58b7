//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing (access log)
//! - Graceful shutdown
//! - `{success, result}` / `{success, reason}` JSON envelopes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
