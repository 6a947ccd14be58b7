//! JSON response envelope shared by every JSON endpoint
//!
//! Success: `{"success": true, "result": ...}` (result omitted when empty).
//! Failure: `{"success": false, "reason": "..."}`.

use serde::Serialize;

/// Successful response body
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
        }
    }
}

impl Envelope<()> {
    /// `{"success": true}` with no result
    pub fn empty() -> Self {
        Self {
            success: true,
            result: None,
        }
    }
}

/// Failure response body
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub success: bool,
    pub reason: String,
}

impl Failure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: reason.into(),
        }
    }
}
