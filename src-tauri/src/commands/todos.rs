//! Todo commands
use serde::{Deserialize, Serialize};
use tauri::State;

use tally_core::TodoStats;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoInfo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<tally_core::TodoItem> for TodoInfo {
    fn from(item: tally_core::TodoItem) -> Self {
        Self {
            id: item.id,
            text: item.text,
            completed: item.completed,
            created_at: item.created_at.to_rfc3339(),
            updated_at: item.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[tauri::command]
pub fn add_todo(state: State<AppState>, text: String) -> CommandResult<TodoInfo> {
    match state.with_app(|app| app.add_todo(&text)) {
        Ok(item) => CommandResult::ok(item.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn update_todo(state: State<AppState>, id: String, text: String) -> CommandResult<bool> {
    match state.with_app(|app| app.update_todo(&id, &text)) {
        Ok(changed) => CommandResult::ok(changed),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn delete_todo(state: State<AppState>, id: String) -> CommandResult<bool> {
    match state.with_app(|app| Ok(app.delete_todo(&id))) {
        Ok(removed) => CommandResult::ok(removed),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn toggle_todo(state: State<AppState>, id: String) -> CommandResult<bool> {
    match state.with_app(|app| Ok(app.toggle_todo(&id))) {
        Ok(toggled) => CommandResult::ok(toggled),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn list_todos(state: State<AppState>) -> CommandResult<Vec<TodoInfo>> {
    match state.with_app(|app| Ok(app.todos())) {
        Ok(items) => CommandResult::ok(items.into_iter().map(Into::into).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn todo_stats(state: State<AppState>) -> CommandResult<TodoStats> {
    match state.with_app(|app| Ok(app.stats())) {
        Ok(stats) => CommandResult::ok(stats),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
