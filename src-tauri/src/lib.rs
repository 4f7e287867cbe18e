//! Tally - Tauri Application
//!
//! Native shell around the Rust core. The WebView renders the todo
//! list; every mutation round-trips through the IPC commands.

mod commands;
mod state;

use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    tally_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Initialize application state (restores the persisted list)
            let state = AppState::new()?;
            state.initialize()?;

            // Store state in Tauri
            app.manage(state);

            let window = WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                .title("Tally")
                .inner_size(480.0, 720.0)
                .min_inner_size(360.0, 480.0)
                .center()
                .build()?;
            let _ = window.show();

            tracing::info!("Tally started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::todos::add_todo,
            commands::todos::update_todo,
            commands::todos::delete_todo,
            commands::todos::toggle_todo,
            commands::todos::list_todos,
            commands::todos::todo_stats,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
