//! Tally Snapshot Bridge
//!
//! Mirrors the in-memory todo collection to a durable slot and
//! restores it at startup:
//! - every successful mutation is followed by a full-overwrite persist,
//!   so the durable copy is never more than one mutation behind
//! - a missing or unreadable snapshot restores as an empty collection,
//!   never as an error

mod bridge;
mod error;
mod snapshot;

pub use bridge::SnapshotBridge;
pub use error::SnapshotError;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

pub type Result<T> = std::result::Result<T, SnapshotError>;
