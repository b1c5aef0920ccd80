use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the store and collection services.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Purchase not found: {0}")]
    PurchaseNotFound(String),
    #[error("Purchase already exists: {0}")]
    PurchaseExists(String),
    #[error("Movement index out of range: {0}")]
    MovementOutOfRange(i64),
    #[error("Profile not set")]
    ProfileNotSet,
    #[error("Profile already exists")]
    ProfileExists,
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T, E = PortalError> = StdResult<T, E>;

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Storage(err.to_string())
    }
}
