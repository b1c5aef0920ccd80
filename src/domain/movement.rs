//! Domain types for account movements.
//!
//! Movements carry no stable identifier; the collection is addressed by
//! 0-based position, so deleting an entry shifts every later index down.

use serde::{Deserialize, Serialize};

/// A single account movement. All fields are opaque display strings; the
/// amount is stored as text and never parsed as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Movement {
    pub date: String,
    pub detail: String,
    pub amount: String,
}

impl Movement {
    pub fn new(
        date: impl Into<String>,
        detail: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            detail: detail.into(),
            amount: amount.into(),
        }
    }
}

/// Document shape of `movements.json`: the full collection in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovementLog {
    pub movements: Vec<Movement>,
}
