//! Command implementations for expensectl CLI

pub mod serve;

pub use serve::run_serve;
