//! The customer's personal data sheet.

use serde::{Deserialize, Serialize};

/// Singleton profile record; at most one instance is ever persisted and its
/// absence is meaningful state ("not yet configured").
///
/// The lowercase aliases let documents written with any field-name casing
/// deserialize once the store has folded their keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "persontype")]
    pub person_type: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(alias = "taxid")]
    pub tax_id: String,
    #[serde(alias = "nationalid")]
    pub national_id: String,
    pub phone1: String,
    pub phone2: String,
    pub address1: String,
    pub address2: String,
}
