//! expensectl-server: HTTP server for expense records
//!
//! Exposes create/read/update/delete and total operations over a single
//! `expense` table in PostgreSQL, plus a pass-through image upload endpoint.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod uploads;

pub use config::StoreConfig;
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Expense, ExpenseInput};
pub use uploads::UploadStore;
