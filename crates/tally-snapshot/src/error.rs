//! Snapshot error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Storage error: {0}")]
    Storage(#[from] tally_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
