//! Todo Store
//!
//! The authoritative in-memory collection. All mutations are routed
//! through the command dispatch in [`crate::action`].

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use crate::action::{apply, TodoAction};
use crate::error::TodoError;
use crate::item::TodoItem;
use crate::list::TodoList;
use crate::Result;

/// Derived counts for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

pub struct TodoStore {
    todos: Arc<RwLock<TodoList>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(TodoList::new())),
        }
    }

    /// Swap in a restored collection wholesale. Used once at startup.
    pub fn replace(&self, list: TodoList) {
        *self.todos.write() = list;
    }

    /// Create a new item and append it to the end of the collection.
    pub fn add(&self, text: &str) -> Result<TodoItem> {
        let item = TodoItem::new(text)?;

        self.dispatch(TodoAction::Add { item: item.clone() });

        tracing::info!(todo_id = %item.id, "Added todo");

        Ok(item)
    }

    /// Replace the text of the matching item. `Ok(false)` means no
    /// item had that id and nothing changed.
    pub fn update_text(&self, id: &str, text: &str) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let changed = self.dispatch(TodoAction::UpdateText {
            id: id.to_string(),
            text: text.to_string(),
        });

        if changed {
            tracing::debug!(todo_id = %id, "Updated todo text");
        }

        Ok(changed)
    }

    /// Delete the matching item. Returns false if no item matched.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.dispatch(TodoAction::Remove { id: id.to_string() });

        if removed {
            tracing::info!(todo_id = %id, "Removed todo");
        }

        removed
    }

    /// Flip the completion flag of the matching item. Returns false if
    /// no item matched.
    pub fn toggle(&self, id: &str) -> bool {
        let toggled = self.dispatch(TodoAction::Toggle { id: id.to_string() });

        if toggled {
            tracing::debug!(todo_id = %id, "Toggled todo");
        }

        toggled
    }

    pub fn get(&self, id: &str) -> Option<TodoItem> {
        self.todos.read().find(id).cloned()
    }

    /// Ordered snapshot of the collection.
    pub fn todos(&self) -> Vec<TodoItem> {
        self.todos.read().items().to_vec()
    }

    /// Clone of the whole collection, for persistence.
    pub fn list(&self) -> TodoList {
        self.todos.read().clone()
    }

    pub fn len(&self) -> usize {
        self.todos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.read().is_empty()
    }

    pub fn stats(&self) -> TodoStats {
        let todos = self.todos.read();
        let total = todos.len();
        let completed = todos.iter().filter(|item| item.completed).count();

        TodoStats {
            total,
            completed,
            remaining: total - completed,
        }
    }

    fn dispatch(&self, action: TodoAction) -> bool {
        apply(&mut self.todos.write(), action)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TodoStore {
    fn clone(&self) -> Self {
        Self {
            todos: Arc::clone(&self.todos),
        }
    }
}
