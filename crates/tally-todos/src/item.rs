//! Todo item data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TodoError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Human-readable description
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// When the item was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the description. The completion flag is untouched.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.updated_at = Utc::now();
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.updated_at = Utc::now();
    }
}
