//! Tally Storage Layer
//!
//! SQLite-based persistence for all application state.
//! The only durable surface the rest of the workspace sees is the
//! named-slot API on [`Database`].

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
