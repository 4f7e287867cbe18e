//! Snapshot envelope
//!
//! The on-disk form is a versioned wrapper around the item array, so
//! the format can evolve without guessing what an old build wrote.

use serde::{Deserialize, Serialize};

use tally_todos::{TodoItem, TodoList};

/// Version written by this build. Readers reject anything newer.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub items: Vec<TodoItem>,
}

impl Snapshot {
    pub fn of(list: &TodoList) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items: list.items().to_vec(),
        }
    }

    pub fn into_list(self) -> TodoList {
        TodoList::from(self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let mut list = TodoList::new();
        list.push(TodoItem::new("ship it").unwrap());

        let json = serde_json::to_string(&Snapshot::of(&list)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["items"][0]["text"], "ship it");
        assert_eq!(value["items"][0]["completed"], false);
    }
}
