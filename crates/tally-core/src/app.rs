//! Main application state container
//!
//! Wires the in-memory store to the snapshot bridge: restore once at
//! startup, mirror to the durable slot after every successful
//! mutation. Persist failures are logged and dropped so a flaky disk
//! never blocks the interactive caller.

use tally_snapshot::SnapshotBridge;
use tally_storage::Database;
use tally_todos::{TodoItem, TodoStats, TodoStore};

use crate::config::Config;
use crate::Result;

pub struct App {
    config: Config,
    db: Database,
    store: TodoStore,
    bridge: SnapshotBridge,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Open database
        let db = Database::open(&config.database_path)?;

        let store = TodoStore::new();
        let bridge = SnapshotBridge::new(db.clone());

        Ok(Self {
            config,
            db,
            store,
            bridge,
        })
    }

    /// Restore the persisted collection into the store. Called once at
    /// process start, before any mutation.
    pub fn initialize(&self) -> Result<()> {
        self.store.replace(self.bridge.restore());

        tracing::info!(todo_count = self.store.len(), "Application initialized");

        Ok(())
    }

    // === Todo operations ===

    pub fn add_todo(&self, text: &str) -> Result<TodoItem> {
        let item = self.store.add(text)?;
        self.persist();
        Ok(item)
    }

    pub fn update_todo(&self, id: &str, text: &str) -> Result<bool> {
        let changed = self.store.update_text(id, text)?;
        if changed {
            self.persist();
        }
        Ok(changed)
    }

    pub fn delete_todo(&self, id: &str) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn toggle_todo(&self, id: &str) -> bool {
        let toggled = self.store.toggle(id);
        if toggled {
            self.persist();
        }
        toggled
    }

    pub fn todos(&self) -> Vec<TodoItem> {
        self.store.todos()
    }

    pub fn stats(&self) -> TodoStats {
        self.store.stats()
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Mirror the current collection to the durable slot, best-effort.
    fn persist(&self) {
        if let Err(e) = self.bridge.persist(&self.store.list()) {
            tracing::warn!("Failed to persist todo snapshot: {}", e);
        }
    }
}
