//! Domain models
//!
//! Request bodies are typed at the HTTP boundary; a body that does not
//! deserialize into these shapes never reaches the store.

pub mod envelope;
pub mod expense;

pub use envelope::{Envelope, Failure};
pub use expense::{Expense, ExpenseInput, ExpenseTotal};
