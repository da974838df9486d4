use thiserror::Error;

use crate::models::RecordId;

/// Errors produced by a storage backend.
///
/// "Not found" is an `Ok(None)`, not an error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not serve the request.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    /// Crediting the campaign would overflow its balance. Nothing was written.
    #[error("Balance of campaign {campaign_id} would overflow when adding {delta}")]
    AmountOverflow { campaign_id: RecordId, delta: i64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
