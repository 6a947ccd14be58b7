//! Route handlers organized by resource

pub mod admin;
pub mod expenses;
pub mod upload;
