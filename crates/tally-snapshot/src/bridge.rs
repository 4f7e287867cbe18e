//! Snapshot Bridge
//!
//! Owns the durable slot the todo collection is mirrored into.

use tally_storage::Database;
use tally_todos::TodoList;

use crate::snapshot::{Snapshot, SNAPSHOT_VERSION};
use crate::Result;

/// Slot key under which the snapshot lives.
const TODOS_SLOT: &str = "todos";

pub struct SnapshotBridge {
    db: Database,
}

impl SnapshotBridge {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read the durable slot back into a collection.
    ///
    /// Degrades to an empty collection on any failure: a missing slot,
    /// unreadable storage, unparsable JSON, or a snapshot version newer
    /// than this build understands. A parsable snapshot is trusted
    /// as-is; we only ever read our own writes.
    pub fn restore(&self) -> TodoList {
        let raw = match self.db.get_slot(TODOS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TodoList::new(),
            Err(e) => {
                tracing::warn!("Failed to read todo snapshot, starting empty: {}", e);
                return TodoList::new();
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Corrupt todo snapshot, starting empty: {}", e);
                return TodoList::new();
            }
        };

        if snapshot.version > SNAPSHOT_VERSION {
            tracing::warn!(
                version = snapshot.version,
                "Todo snapshot from a newer build, starting empty"
            );
            return TodoList::new();
        }

        tracing::info!(todo_count = snapshot.items.len(), "Restored todo snapshot");

        snapshot.into_list()
    }

    /// Serialize the full collection and overwrite the slot.
    pub fn persist(&self, list: &TodoList) -> Result<()> {
        let json = serde_json::to_string(&Snapshot::of(list))?;
        self.db.set_slot(TODOS_SLOT, &json)?;

        tracing::debug!(todo_count = list.len(), "Persisted todo snapshot");

        Ok(())
    }
}

impl Clone for SnapshotBridge {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_todos::TodoItem;

    fn bridge() -> SnapshotBridge {
        SnapshotBridge::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_missing_slot_restores_empty() {
        assert!(bridge().restore().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_content_and_order() {
        let bridge = bridge();

        let mut list = TodoList::new();
        list.push(TodoItem::new("first").unwrap());
        let mut second = TodoItem::new("second").unwrap();
        second.toggle();
        list.push(second);
        list.push(TodoItem::new("third").unwrap());

        bridge.persist(&list).unwrap();
        let restored = bridge.restore();

        assert_eq!(restored, list);
        let texts: Vec<&str> = restored.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert!(restored.iter().nth(1).unwrap().completed);
    }

    #[test]
    fn test_corrupt_slot_restores_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set_slot("todos", "not json at all {{{").unwrap();

        let bridge = SnapshotBridge::new(db);
        assert!(bridge.restore().is_empty());
    }

    #[test]
    fn test_newer_version_restores_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set_slot("todos", r#"{"version": 99, "items": []}"#).unwrap();

        let bridge = SnapshotBridge::new(db);
        assert!(bridge.restore().is_empty());
    }

    #[test]
    fn test_persist_overwrites_whole_slot() {
        let bridge = bridge();

        let mut list = TodoList::new();
        list.push(TodoItem::new("keep").unwrap());
        list.push(TodoItem::new("drop").unwrap());
        bridge.persist(&list).unwrap();

        let drop_id = list.iter().nth(1).unwrap().id.clone();
        list.remove(&drop_id);
        bridge.persist(&list).unwrap();

        let restored = bridge.restore();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.iter().next().unwrap().text, "keep");
    }
}
