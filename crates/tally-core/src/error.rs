//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tally_storage::StorageError),

    #[error("Todo error: {0}")]
    Todo(#[from] tally_todos::TodoError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] tally_snapshot::SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Application not initialized")]
    NotInitialized,
}
