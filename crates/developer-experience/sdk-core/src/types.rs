/// Wire types for execution queue operations
use serde::{Deserialize, Serialize};

/// Status code the server answers with when a reorder was applied
pub const STATUS_OK: u16 = 200;

/// Body of a reorder request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReorderRequest {
    /// Direction as typed by the caller (UP or DOWN, any casing)
    pub reorder_action: String,
}

impl ReorderRequest {
    pub fn new(reorder_action: impl Into<String>) -> Self {
        Self {
            reorder_action: reorder_action.into(),
        }
    }
}

/// Result of a reorder call that reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderOutcome {
    pub status_code: u16,
}

impl ReorderOutcome {
    pub fn new(status_code: u16) -> Self {
        Self { status_code }
    }

    /// Only the canonical OK code counts as applied
    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }
}
