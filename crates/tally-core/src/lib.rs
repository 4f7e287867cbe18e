//! Tally Core
//!
//! Central coordination layer: Rust owns all todo state, the WebView
//! is a stateless renderer. A single [`App`] is created at process
//! start and handed to consumers by explicit reference.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use tally_snapshot::{Snapshot, SnapshotBridge, SnapshotError};
pub use tally_storage::{Database, StorageError};
pub use tally_todos::{TodoAction, TodoError, TodoItem, TodoList, TodoStats, TodoStore};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
