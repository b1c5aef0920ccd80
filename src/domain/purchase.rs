//! Domain types for customer purchases.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchase the customer placed, identified by a caller-supplied id.
///
/// Ids are unique within the collection up to letter case; the uniqueness
/// check happens on create only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub status: String,
}

impl Purchase {
    pub fn new(id: impl Into<String>, price: Decimal, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            price,
            status: status.into(),
        }
    }

    /// Case-insensitive exact match on the purchase id.
    ///
    /// Folding is ASCII-only: non-ASCII letters compare byte-wise, so ids
    /// differing only in the case of such letters are distinct.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }

    /// Case-insensitive exact match on the status label. ASCII-only folding,
    /// as for [`Purchase::has_id`].
    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status)
    }
}

/// Document shape of `purchases.json`: the full collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseBook {
    pub purchases: Vec<Purchase>,
}
